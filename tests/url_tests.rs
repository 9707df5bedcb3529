//! Tests for URL building.

use pxurl::{build_url, UrlBuilder};

#[test]
fn test_build_url_scheme_and_host() {
    let test_cases = vec![
        (("http", "example.com"), "http://example.com"),
        (("https", "example.com"), "https://example.com"),
        (("http", "1.2.3.4"), "http://1.2.3.4"),
    ];

    for ((scheme, host), expected) in test_cases {
        let url = build_url(scheme, host, None, None, None);
        assert_eq!(url, expected, "Build failed for: {}", host);
    }
}

#[test]
fn test_build_url_ports() {
    let test_cases = vec![
        ("http", 80, "http://example.com"),
        ("http", 81, "http://example.com:81"),
        ("https", 443, "https://example.com"),
        ("https", 444, "https://example.com:444"),
        ("https", 80, "https://example.com:80"),
        ("http", 443, "http://example.com:443"),
    ];

    for (scheme, port, expected) in test_cases {
        let url = build_url(scheme, "example.com", Some(port), None, None);
        assert_eq!(url, expected, "Port handling failed for: {}:{}", scheme, port);
    }
}

#[test]
fn test_default_port_same_as_no_port() {
    for host in ["example.com", "1.2.3.4", "1:2::3:4"] {
        assert_eq!(
            build_url("http", host, Some(80), None, None),
            build_url("http", host, None, None, None)
        );
        assert_eq!(
            build_url("https", host, Some(443), None, None),
            build_url("https", host, None, None, None)
        );
    }
}

#[test]
fn test_build_url_paths() {
    assert_eq!(
        build_url("http", "example.com", Some(80), Some("/"), None),
        "http://example.com/"
    );
    assert_eq!(
        build_url("http", "example.com", Some(80), Some("/test?k=%#v"), None),
        "http://example.com/test%3Fk%3D%25%23v"
    );
}

#[test]
fn test_build_url_query_params() {
    let empty: &[(&str, &str)] = &[];
    assert_eq!(
        build_url("http", "example.com", Some(80), Some("/test"), Some(empty)),
        "http://example.com/test?"
    );
    assert_eq!(
        build_url("http", "example.com", Some(80), Some("/test"), Some(&[("k", "%#v")][..])),
        "http://example.com/test?k=%25%23v"
    );
    assert_eq!(
        build_url(
            "http",
            "example.com",
            Some(80),
            Some("/test"),
            Some(&[("a", "b"), ("c", "d")][..])
        ),
        "http://example.com/test?a=b&c=d"
    );
}

#[test]
fn test_build_url_space_is_percent_encoded() {
    let url = build_url("http", "example.com", None, None, Some(&[("a b", "c d")][..]));
    assert_eq!(url, "http://example.com?a%20b=c%20d");
}

#[test]
fn test_build_url_ipv6_host() {
    assert_eq!(build_url("http", "1:2::3:4", None, None, None), "http://[1:2::3:4]");
    assert_eq!(
        build_url("https", "1:2::3:4", Some(9000), None, None),
        "https://[1:2::3:4]:9000"
    );
}

#[test]
fn test_build_url_stray_brackets_escaped() {
    let test_cases = vec![
        ("bog][us", "http://bog%5D%5Bus"),
        ("bog:u]s", "http://bog%3Au%5Ds"),
        ("bog[:us", "http://bog%5B%3Aus"),
    ];

    for (host, expected) in test_cases {
        let url = build_url("http", host, None, None, None);
        assert_eq!(url, expected, "Escaping failed for: {}", host);
    }
}

#[test]
fn test_builder_matches_function() {
    let from_builder = UrlBuilder::new("http", "example.com")
        .port(8080)
        .path("/test")
        .query_params(vec![("a", "b"), ("c", "d")])
        .build();
    let from_fn = build_url(
        "http",
        "example.com",
        Some(8080),
        Some("/test"),
        Some(&[("a", "b"), ("c", "d")][..]),
    );

    assert_eq!(from_builder, from_fn);
    assert_eq!(from_builder, "http://example.com:8080/test?a=b&c=d");
}
