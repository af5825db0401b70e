//! Classification of raw Notion query bodies into media posts.
//!
//! Bodies mirror what the API returns, including property types the
//! classifier never reads.

use notion_media_widget::{
    api::{parser::parse_query_response, ApiResponse},
    constants::FALLBACK_COVER_URL,
    map_page, MediaKind, MediaPost, PropertyNames,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

const QUERY_BODY: &str = r#"{
    "object": "list",
    "results": [
        {
            "object": "page",
            "id": "216cd412-8533-8087-a989-cf37889137c3",
            "created_time": "2024-02-10T08:30:00.000Z",
            "last_edited_time": "2024-02-11T08:30:00.000Z",
            "archived": false,
            "url": "https://www.notion.so/Launch-216cd41285338087a989cf37889137c3",
            "properties": {
                "Status": {
                    "id": "st",
                    "type": "select",
                    "select": {"id": "1", "name": "Scheduled", "color": "blue"}
                },
                "Publish date": {
                    "id": "pd",
                    "type": "date",
                    "date": {"start": "2024-03-03", "end": null, "time_zone": null}
                },
                "Visuals": {
                    "id": "vi",
                    "type": "files",
                    "files": [
                        {
                            "name": "cover.PNG",
                            "type": "file",
                            "file": {
                                "url": "https://prod-files.s3.amazonaws.com/cover.png?X-Amz-Signature=abc",
                                "expiry_time": "2024-03-03T10:00:00.000Z"
                            }
                        },
                        {
                            "name": "teaser.mov",
                            "type": "file",
                            "file": {
                                "url": "https://prod-files.s3.amazonaws.com/teaser.mov",
                                "expiry_time": "2024-03-03T10:00:00.000Z"
                            }
                        }
                    ]
                },
                "Subject": {
                    "id": "title",
                    "type": "title",
                    "title": [
                        {
                            "type": "text",
                            "text": {"content": "Spring launch", "link": null},
                            "annotations": {"bold": false, "italic": false, "strikethrough": false, "underline": false, "code": false, "color": "default"},
                            "plain_text": "Spring launch",
                            "href": null
                        }
                    ]
                }
            }
        },
        {
            "object": "page",
            "id": "316cd412-8533-8087-a989-cf37889137c3",
            "created_time": "2024-01-05T23:59:00.000Z",
            "properties": {
                "Publish date": {
                    "id": "pd",
                    "type": "date",
                    "date": {"start": "2024-02-14T09:00:00.000+01:00", "end": null, "time_zone": null}
                },
                "Visuals": {
                    "id": "vi",
                    "type": "files",
                    "files": [
                        {
                            "name": "brief.pdf",
                            "type": "file",
                            "file": {"url": "https://prod-files.s3.amazonaws.com/brief.pdf", "expiry_time": null}
                        },
                        {
                            "name": "one.jpg",
                            "type": "external",
                            "external": {"url": "https://images.example.com/one.jpg"}
                        },
                        {
                            "name": "two.webp",
                            "type": "file",
                            "file": {"url": "https://prod-files.s3.amazonaws.com/two.webp", "expiry_time": null}
                        }
                    ]
                },
                "Subject": {"id": "title", "type": "title", "title": []},
                "Score": {"id": "sc", "type": "number", "number": 7}
            }
        },
        {
            "object": "page",
            "id": "416cd412-8533-8087-a989-cf37889137c3",
            "created_time": "2024-01-05T10:00:00.000Z",
            "properties": {
                "Publish date": {"id": "pd", "type": "date", "date": null},
                "Visuals": {"id": "vi", "type": "rich_text", "rich_text": []},
                "Subject": {
                    "id": "title",
                    "type": "title",
                    "title": [{"type": "text", "plain_text": "Text only", "href": null}]
                }
            }
        }
    ],
    "next_cursor": null,
    "has_more": false
}"#;

fn classify(body: &str) -> Vec<MediaPost> {
    let response = parse_query_response(ApiResponse {
        data: body.to_string(),
        status: StatusCode::OK,
        url: "https://api.notion.com/v1/databases/x/query".to_string(),
    })
    .expect("query body should parse");

    let names = PropertyNames::default();
    response
        .results
        .iter()
        .map(|page| map_page(page, &names))
        .collect()
}

#[test]
fn test_video_wins_over_images() {
    let posts = classify(QUERY_BODY);
    let post = &posts[0];

    assert_eq!(post.id, "216cd412-8533-8087-a989-cf37889137c3");
    assert_eq!(post.title, "Spring launch");
    assert_eq!(post.date, "Mar 3");
    assert_eq!(post.kind, MediaKind::Video);
    assert_eq!(
        post.video_url.as_deref(),
        Some("https://prod-files.s3.amazonaws.com/teaser.mov")
    );
    assert_eq!(post.images, None);
}

#[test]
fn test_carousel_skips_unknown_extensions_and_keeps_order() {
    let posts = classify(QUERY_BODY);
    let post = &posts[1];

    assert_eq!(post.title, "Untitled");
    assert_eq!(post.date, "Feb 14");
    assert_eq!(post.kind, MediaKind::Carousel);
    assert_eq!(
        post.images(),
        &[
            "https://images.example.com/one.jpg".to_string(),
            "https://prod-files.s3.amazonaws.com/two.webp".to_string(),
        ]
    );
    assert_eq!(post.url, "https://images.example.com/one.jpg");
}

#[test]
fn test_wrong_property_types_fall_back() {
    let posts = classify(QUERY_BODY);
    let post = &posts[2];

    assert_eq!(post.title, "Text only");
    assert_eq!(post.date, "Jan 5");
    assert_eq!(post.kind, MediaKind::Image);
    assert!(!post.has_media());
    assert_eq!(post.url, FALLBACK_COVER_URL);
}

#[test]
fn test_serialized_shape() {
    let posts = classify(QUERY_BODY);
    let json = serde_json::to_value(&posts[2]).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": "416cd412-8533-8087-a989-cf37889137c3",
            "type": "image",
            "date": "Jan 5",
            "title": "Text only",
            "url": FALLBACK_COVER_URL
        })
    );
}

#[test]
fn test_empty_result_set() {
    let posts = classify(r#"{"object": "list", "results": [], "next_cursor": null, "has_more": false}"#);
    assert!(posts.is_empty());
}

#[test]
fn test_error_body_is_not_an_empty_list() {
    let result = parse_query_response(ApiResponse {
        data: r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find database"}"#
            .to_string(),
        status: StatusCode::NOT_FOUND,
        url: "https://api.notion.com/v1/databases/x/query".to_string(),
    });

    let err = result.unwrap_err();
    assert!(err.is_upstream());
}
