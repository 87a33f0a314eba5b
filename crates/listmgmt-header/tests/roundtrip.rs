//! Round-trip and wire format tests for list headers.

#![allow(clippy::unwrap_used)]

use listmgmt_header::{Error, FieldName, Header, Iri, ParseConfig, Post, Url};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("listmgmt_header=trace")
        .with_test_writer()
        .try_init();
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn iri(s: &str) -> Url {
    Url::parse_iri(s).unwrap()
}

#[test]
fn test_end_to_end_example() {
    let header = Header::new()
        .with_help(url("https://example.com/help"))
        .with_post(Post::NoPosting);

    let bytes = header.to_bytes();
    assert_eq!(
        bytes,
        b"List-Help: <https://example.com/help>\r\nList-Post: NO\r\n"
    );

    let parsed: Header = Header::parse(&bytes).unwrap();
    assert_eq!(parsed, header);
}

#[test]
fn test_no_precedence() {
    for input in ["NO", "no", "No", " NO ", "\tNO\t", " \tno"] {
        let post: Post = input.parse().unwrap();
        assert_eq!(post, Post::NoPosting, "input {input:?}");
    }
}

#[test]
fn test_strict_and_tolerant_diverge() {
    init_tracing();

    assert_eq!(
        Post::<Url>::parse(b"<not-a-valid-iri scheme>"),
        Err(Error::InvalidIri("not-a-valid-iri scheme".into()))
    );

    let header: Header = Header::parse(b"List-Post: <not-a-valid-iri scheme>\r\n").unwrap();
    assert_eq!(header.post, None);
    assert!(header.is_empty());

    let strict = Header::<Url>::parse_with(
        b"List-Post: <not-a-valid-iri scheme>\r\n",
        &ParseConfig::strict(),
    );
    assert_eq!(
        strict,
        Err(Error::InvalidIri("not-a-valid-iri scheme".into()))
    );
}

#[test]
fn test_multi_iri_order_preserved() {
    let a = url("mailto:b-leave@example.com");
    let b = url("https://example.com/a-leave");
    let header = Header::new().with_unsubscribe(vec![a.clone(), b.clone()]);

    let parsed: Header = Header::parse(&header.to_bytes()).unwrap();
    assert_eq!(parsed.unsubscribe, Some(vec![a, b]));
}

#[test]
fn test_angle_bracket_addresses_keep_recipient() {
    let header = Header::new()
        .with_help(url("mailto:a>b@example.com"))
        .with_post(Post::Uris(vec![url("mailto:x<y@example.com")]));

    let bytes = header.to_bytes();
    let parsed: Header = Header::parse(&bytes).unwrap();
    assert_eq!(parsed.help, Some(iri("mailto:a>b@example.com")));
    assert_eq!(
        parsed.post,
        Some(Post::Uris(vec![iri("mailto:x<y@example.com")]))
    );
    assert_eq!(parsed.to_bytes(), bytes);

    let strict: Header = Header::parse_with(&bytes, &ParseConfig::strict()).unwrap();
    assert_eq!(strict, parsed);
}

#[test]
fn test_duplicate_entries_kept() {
    let a = url("mailto:leave@example.com");
    let header = Header::new().with_owner(vec![a.clone(), a.clone()]);

    let parsed: Header = Header::parse(&header.to_bytes()).unwrap();
    assert_eq!(parsed.owner, Some(vec![a.clone(), a]));
}

#[test]
fn test_empty_list_suppressed() {
    let header: Header = Header::new()
        .with_unsubscribe(Vec::new())
        .with_help(url("https://example.com/help"));
    let text = header.to_string();
    assert!(!text.contains("List-Unsubscribe"));
    assert_eq!(text, "List-Help: <https://example.com/help>\r\n");
}

#[test]
fn test_unknown_field_tolerated() {
    init_tracing();

    let with: Header = Header::parse(
        b"Subject: hello\r\nX-Custom: whatever\r\nList-Help: <https://example.com/help>\r\n",
    )
    .unwrap();
    let without: Header = Header::parse(b"List-Help: <https://example.com/help>\r\n").unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_real_world_block() {
    init_tracing();

    let raw = concat!(
        "Received: from mail.example.com\r\n",
        "List-Id: Example discussion <example.lists.example.com>\r\n",
        "List-Unsubscribe: <https://lists.example.com/options/example>,\r\n",
        "List-Archive: <https://lists.example.com/archives/example/>\r\n",
        "List-Post: <mailto:example@lists.example.com>\r\n",
        "List-Help: <mailto:example-request@lists.example.com?subject=help>\r\n",
        "List-Subscribe: <https://lists.example.com/listinfo/example>,\r\n",
        "\r\n",
        "Body text: not a header but has a colon\r\n",
    );

    let header: Header = raw.parse().unwrap();
    assert_eq!(
        header.help,
        Some(url("mailto:example-request@lists.example.com?subject=help"))
    );
    assert_eq!(
        header.archive,
        Some(url("https://lists.example.com/archives/example/"))
    );
    assert_eq!(header.owner, None);

    let map = header.to_field_map();
    assert_eq!(map.len(), 5);
    assert_eq!(map["List-Post"], "<mailto:example@lists.example.com>");
}

#[test]
fn test_field_lines_use_fixed_names() {
    let header = Header::new()
        .with_help(url("https://example.com/help"))
        .with_owner(vec![url("mailto:owner@example.com")]);
    let rendered = header.to_string();
    let names: Vec<&str> = rendered
        .lines()
        .filter_map(|line| line.split_once(':').map(|(name, _)| name))
        .collect();
    assert_eq!(
        names,
        vec![FieldName::Help.as_str(), FieldName::Owner.as_str()]
    );
}

/// Addresses with characters the bracket and comma grammar is sensitive to.
fn arb_url() -> impl Strategy<Value = Url> {
    prop_oneof![
        (
            "[a-z0-9<>, é.]{1,12}",
            "[a-z]{1,8}",
            proptest::option::of("[a-z <>,é]{0,8}"),
        )
            .prop_map(|(local, domain, subject)| {
                let mut s = format!("mailto:{local}@{domain}.example");
                if let Some(subject) = subject {
                    s.push_str("?subject=");
                    s.push_str(&subject);
                }
                iri(&s)
            }),
        (
            "[a-z]{1,8}",
            "[a-z0-9/<>, é]{0,16}",
            proptest::option::of("[a-z <>,]{0,6}"),
        )
            .prop_map(|(host, path, fragment)| {
                let mut s = format!("https://{host}.example/{path}");
                if let Some(fragment) = fragment {
                    s.push('#');
                    s.push_str(&fragment);
                }
                iri(&s)
            }),
    ]
}

fn arb_list() -> impl Strategy<Value = Option<Vec<Url>>> {
    proptest::option::of(prop::collection::vec(arb_url(), 1..4))
}

fn arb_post() -> impl Strategy<Value = Post> {
    prop_oneof![
        Just(Post::NoPosting),
        prop::collection::vec(arb_url(), 1..4).prop_map(Post::Uris),
    ]
}

fn arb_header() -> impl Strategy<Value = Header> {
    (
        proptest::option::of(arb_url()),
        arb_list(),
        arb_list(),
        proptest::option::of(arb_post()),
        arb_list(),
        proptest::option::of(arb_url()),
    )
        .prop_map(|(help, unsubscribe, subscribe, post, owner, archive)| Header {
            help,
            unsubscribe,
            subscribe,
            post,
            owner,
            archive,
        })
}

proptest! {
    #[test]
    fn post_round_trip(post in arb_post()) {
        let parsed: Post = Post::parse(&post.to_bytes()).unwrap();
        prop_assert_eq!(parsed, post);
    }

    #[test]
    fn header_round_trip(header in arb_header()) {
        let parsed: Header = Header::parse(&header.to_bytes()).unwrap();
        prop_assert_eq!(parsed, header);
    }

    #[test]
    fn header_round_trip_strict(header in arb_header()) {
        let parsed: Header = Header::parse_with(&header.to_bytes(), &ParseConfig::strict()).unwrap();
        prop_assert_eq!(parsed, header);
    }

    #[test]
    fn header_parse_never_fails(input in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert!(Header::<Url>::parse(&input).is_ok());
    }
}
