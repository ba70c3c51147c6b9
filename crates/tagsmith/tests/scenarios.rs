use rstest::rstest;
use tagsmith::{
    render_anchor, render_table, render_tag, resolve_grid_headers, AttrValue, ColumnHeader,
    HeaderDescriptor, MarkupError, SortDirection,
};

fn sortable(text: &str, data: &str, sort: SortDirection) -> Vec<HeaderDescriptor> {
    vec![ColumnHeader::new()
        .with_text(text)
        .with_data(data)
        .sorted(sort)
        .into()]
}

/// Pull the href back out of a rendered anchor.
fn href_of(anchor: &str) -> &str {
    let start = anchor.find("href=\"").map(|i| i + 6).unwrap();
    let end = anchor[start..].find('"').unwrap();
    &anchor[start..start + end]
}

#[test]
fn test_tag_without_content() {
    assert_eq!(render_tag("h1", (), &AttrValue::default()).unwrap(), "<h1 />");
}

#[test]
fn test_tag_with_list_content_and_class_list() {
    let attrs = AttrValue::map().with("class", ["test", "test2"]);
    assert_eq!(
        render_tag("h1", ["hello", "world"], &attrs).unwrap(),
        r#"<h1 class="test test2">helloworld</h1>"#
    );
}

#[test]
fn test_anchor_puts_href_last() {
    let attrs = AttrValue::map().with("class", ["test", "test2"]).with("id", "hello");
    assert_eq!(
        render_anchor("hello", "http://google.com", &attrs).unwrap(),
        r#"<a class="test test2" id="hello" href="http://google.com">hello</a>"#
    );
}

#[test]
fn test_grid_header_toggles_existing_sort() {
    assert_eq!(
        resolve_grid_headers(
            &sortable("hello", "id", SortDirection::Asc),
            "localhost:3000?sb=id&sd=asc"
        ),
        vec![r#"<a href="localhost:3000?sb=id&sd=desc">hello</a>"#]
    );
}

#[test]
fn test_grid_headers_feed_table() {
    let headers = resolve_grid_headers(&sortable("ID", "id", SortDirection::Asc), "");
    assert_eq!(
        render_table(&headers, &[vec!["1"]], &AttrValue::default()).unwrap(),
        r#"<table><thead><tr><th><a href="?sb=id&sd=asc">ID</a></th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>"#
    );
}

#[rstest]
#[case(SortDirection::Asc, "asc", "desc")]
#[case(SortDirection::Asc, "desc", "asc")]
#[case(SortDirection::Zero, "0", "1")]
#[case(SortDirection::Zero, "1", "0")]
#[case(SortDirection::Desc, "", "desc")]
#[case(SortDirection::Desc, "bogus", "desc")]
fn test_toggle_table(
    #[case] default: SortDirection,
    #[case] current: &str,
    #[case] expected: &str,
) {
    let url = format!("/list?sb=id&sd={}", current);
    let cells = resolve_grid_headers(&sortable("ID", "id", default), &url);
    assert_eq!(href_of(&cells[0]), format!("/list?sb=id&sd={}", expected));
}

#[test]
fn test_toggle_is_a_two_cycle() {
    let headers = sortable("ID", "id", SortDirection::Asc);
    let first = resolve_grid_headers(&headers, "?sb=id&sd=asc");
    let second_url = href_of(&first[0]).to_string();
    assert_eq!(second_url, "?sb=id&sd=desc");

    let second = resolve_grid_headers(&headers, &second_url);
    assert_eq!(href_of(&second[0]), "?sb=id&sd=asc");
}

#[rstest]
#[case("a:b")]
#[case("created at")]
fn test_sort_key_round_trips_unescaped(#[case] data: &str) {
    let headers = sortable("T", data, SortDirection::Asc);
    let first = resolve_grid_headers(&headers, "");
    let next_url = href_of(&first[0]).to_string();
    assert_eq!(next_url, format!("?sb={}&sd=asc", data));

    let second = resolve_grid_headers(&headers, &next_url);
    assert_eq!(href_of(&second[0]), format!("?sb={}&sd=desc", data));
}

#[rstest]
#[case("?sb=x&sd=asc", "?sb=y&sd=desc")]
#[case("?sb=x&sd=1", "?sb=y&sd=desc")]
#[case("http://h/p?sd=asc&page=2&sb=x#t", "http://h/p?sd=desc&page=2&sb=y#t")]
#[case("/p?page=2", "/p?page=2&sb=y&sd=desc")]
fn test_switching_column(#[case] url: &str, #[case] expected: &str) {
    let cells = resolve_grid_headers(&sortable("Y", "y", SortDirection::Desc), url);
    assert_eq!(href_of(&cells[0]), expected);
}

#[test]
fn test_grid_output_matches_input_length_and_order() {
    let headers: Vec<HeaderDescriptor> = vec![
        "first".into(),
        ColumnHeader::new().with_text("second").into(),
        ColumnHeader::new()
            .with_data("third")
            .sorted(SortDirection::One)
            .into(),
        HeaderDescriptor::label("fourth"),
        ColumnHeader::new().into(),
    ];
    let cells = resolve_grid_headers(&headers, "/t?sb=third&sd=1");
    assert_eq!(cells.len(), headers.len());
    assert_eq!(cells[0], "first");
    assert_eq!(cells[1], "second");
    assert_eq!(cells[2], r#"<a href="/t?sb=third&sd=0">third</a>"#);
    assert_eq!(cells[3], "fourth");
    assert_eq!(cells[4], "");
}

#[test]
fn test_table_counts_match_input() {
    let rows = vec![vec!["1", "a"], vec!["2", "b"], vec!["3", "c"]];
    let html = render_table(&["n", "s"], &rows, &AttrValue::default()).unwrap();
    assert_eq!(html.matches("<th>").count(), 2);
    assert_eq!(html.matches("<tr>").count(), 4);
    assert_eq!(html.matches("<td>").count(), 6);
}

#[test]
fn test_headers_and_attributes_from_json() {
    let headers: Vec<HeaderDescriptor> = serde_json::from_str(
        r##"["#", {"text": "Name", "data": "name", "sort": "desc"}, {"data": "email"}]"##,
    )
    .unwrap();
    let options: AttrValue =
        serde_json::from_str(r#"{"class": ["grid", "striped"], "data-rows": 1}"#).unwrap();

    let html = render_table(
        &resolve_grid_headers(&headers, "/users"),
        &[vec!["1", "Ada", "ada@example.com"]],
        &options,
    )
    .unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<table class="grid striped" data-rows="1">"#,
            r#"<thead><tr><th>#</th><th><a href="/users?sb=name&sd=desc">Name</a></th><th>email</th></tr></thead>"#,
            r#"<tbody><tr><td>1</td><td>Ada</td><td>ada@example.com</td></tr></tbody>"#,
            "</table>"
        )
    );
}

#[test]
fn test_errors_surface_without_output() {
    assert!(matches!(
        render_tag("", "x", &AttrValue::default()),
        Err(MarkupError::InvalidTagName(_))
    ));
    let bad: AttrValue = serde_json::from_str(r#"{"ok": "1", " ": "2"}"#).unwrap();
    assert!(matches!(
        render_anchor("x", "/y", &bad),
        Err(MarkupError::InvalidAttributeKey(_))
    ));
}
