//! Integration tests across the builder, query parser and address parser.

use pxurl::{
    build_url, get_query_param_addr, get_query_param_boolean, parse_addr_spec,
    parse_query_from_url, parse_query_string, Address, QueryMapping, UrlBuilder,
};

#[test]
fn test_built_query_parses_back() {
    let params = vec![
        ("client", "1.2.3.4:9000"),
        ("relay", "[1:2::a:f]:9001"),
        ("note", "a b&c=d%e#f"),
        ("empty", ""),
    ];

    let url = UrlBuilder::new("http", "facilitator.example.com")
        .path("/")
        .query_params(params.clone())
        .build();
    let (_, raw_query) = url.split_once('?').unwrap();

    let query = parse_query_string(raw_query);
    let recovered: Vec<(&str, &str)> = query.iter().collect();
    assert_eq!(recovered, params);
}

#[test]
fn test_built_url_is_interoperable() {
    let url = build_url(
        "https",
        "1:2::3:4",
        Some(8443),
        Some("/a b/c?d"),
        Some(&[("k", "v w"), ("x", "+")][..]),
    );

    let parsed = ::url::Url::parse(&url).unwrap();
    assert_eq!(parsed.scheme(), "https");
    assert_eq!(parsed.host_str(), Some("[1:2::3:4]"));
    assert_eq!(parsed.port(), Some(8443));
    assert_eq!(parsed.path(), "/a%20b/c%3Fd");

    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("k".to_string(), "v w".to_string()),
            ("x".to_string(), "+".to_string()),
        ]
    );
}

#[test]
fn test_default_port_dropped_by_url_crate_too() {
    let url = build_url("http", "example.com", Some(80), Some("/"), None);
    let parsed = ::url::Url::parse(&url).unwrap();
    assert_eq!(parsed.port(), None);
    assert_eq!(parsed.as_str(), url);
}

#[test]
fn test_proxy_configuration_flow() {
    let page = concat!(
        "http://example.com/embed.html",
        "?debug&facilitator=%5B1%3A2%3A%3Aa%3Af%5D%3A9002&relay=bogus"
    );
    let query = parse_query_from_url(page).unwrap();

    let default_facilitator = Address::new("127.0.0.1", 9002);
    let facilitator = get_query_param_addr(&query, "facilitator", default_facilitator.clone());
    assert_eq!(facilitator, Some(Address::new("1:2::a:f", 9002)));

    assert_eq!(get_query_param_addr(&query, "relay", default_facilitator.clone()), None);
    assert_eq!(
        get_query_param_addr(&query, "client", default_facilitator.clone()),
        Some(default_facilitator)
    );
    assert_eq!(get_query_param_boolean(&query, "debug", false), Some(true));

    let facilitator = facilitator.unwrap();
    let url = UrlBuilder::new("http", facilitator.host())
        .port(facilitator.port())
        .path("/")
        .query_param("client", "3.3.3.3:4444")
        .build();
    assert_eq!(url, "http://[1:2::a:f]:9002/?client=3.3.3.3%3A4444");

    let (_, raw_query) = url.split_once('?').unwrap();
    let client = parse_addr_spec(parse_query_string(raw_query).get("client").unwrap());
    assert_eq!(client, Some(Address::new("3.3.3.3", 4444)));
}

#[test]
fn test_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Address>();
    assert_send_sync::<QueryMapping>();
    assert_send_sync::<UrlBuilder>();
    assert_send_sync::<pxurl::PxurlError>();
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let addr = Address::new("1:2::a:f", 4444);
    let json = serde_json::to_string(&addr).unwrap();
    assert_eq!(json, r#"{"host":"1:2::a:f","port":4444}"#);
    assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), addr);

    let query = parse_query_string("a=b&c=d");
    let json = serde_json::to_string(&query).unwrap();
    assert_eq!(json, r#"[["a","b"],["c","d"]]"#);

    // Deserializing keeps first-wins semantics.
    let dup: QueryMapping = serde_json::from_str(r#"[["a","b"],["a","e"]]"#).unwrap();
    assert_eq!(dup.get("a"), Some("b"));
    assert_eq!(dup.len(), 1);
}
