//! Assembly of the `/parse` response objects.

use url::Url;

use crate::models::{LinkOutput, LinkRecord};

use super::url::resolve_href;

/// Converts extracted records into response objects.
///
/// Each record's target is resolved against `base`; empty fields are left out
/// and records with no non-empty field are dropped. Order is preserved.
pub fn build_link_outputs(base: &Url, records: Vec<LinkRecord>) -> Vec<LinkOutput> {
    records
        .into_iter()
        .filter(|record| !record.is_empty())
        .map(|record| LinkOutput {
            href: (!record.target.is_empty()).then(|| resolve_href(base, &record.target)),
            content: (!record.text.is_empty()).then_some(record.text),
            images: (!record.images.is_empty())
                .then(|| record.images.into_iter().map(Into::into).collect()),
            emails: (!record.emails.is_empty()).then_some(record.emails),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageOutput, ImageRef};

    fn base() -> Url {
        Url::parse("http://site.test/").expect("valid base")
    }

    #[test]
    fn test_empty_records_are_dropped() {
        let records = vec![
            LinkRecord::default(),
            LinkRecord {
                text: "kept".into(),
                ..Default::default()
            },
            LinkRecord::default(),
        ];
        let outputs = build_link_outputs(&base(), records);
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].content.as_deref(), Some("kept"));
        assert_eq!(outputs[0].href, None);
    }

    #[test]
    fn test_full_record_is_resolved_and_converted() {
        let records = vec![LinkRecord {
            target: "/x".into(),
            text: "hello bob@test.com".into(),
            images: vec![ImageRef {
                src: "y.png".into(),
                alt: "Y".into(),
            }],
            emails: vec!["bob@test.com".into()],
        }];
        let outputs = build_link_outputs(&base(), records);
        assert_eq!(
            outputs,
            vec![LinkOutput {
                href: Some("http://site.test/x".into()),
                content: Some("hello bob@test.com".into()),
                images: Some(vec![ImageOutput {
                    src: "y.png".into(),
                    alt: "Y".into(),
                }]),
                emails: Some(vec!["bob@test.com".into()]),
            }]
        );
    }

    #[test]
    fn test_image_only_record_is_kept() {
        let records = vec![LinkRecord {
            images: vec![ImageRef::default()],
            ..Default::default()
        }];
        let outputs = build_link_outputs(&base(), records);
        assert_eq!(outputs.len(), 1);
        let json = serde_json::to_string(&outputs).expect("serializes");
        assert_eq!(json, r#"[{"Images":[{"Src":"","Alt":""}]}]"#);
    }

    #[test]
    fn test_order_is_preserved() {
        let records = ["/a", "b", "http://c.example/"]
            .iter()
            .map(|t| LinkRecord {
                target: t.to_string(),
                ..Default::default()
            })
            .collect();
        let hrefs: Vec<String> = build_link_outputs(&base(), records)
            .into_iter()
            .filter_map(|o| o.href)
            .collect();
        assert_eq!(
            hrefs,
            vec!["http://site.test/a", "http://site.test/b", "http://c.example/"]
        );
    }
}
