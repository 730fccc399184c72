//! Meta and links validation

use crate::error::{JsonApiError, TypeError};
use crate::links::{Link, LinkValue};
use crate::types::Document;
use serde_json::Value;

#[cfg(feature = "logging")]
use tracing::debug;

/// Accepted shapes for a meta value
const META_EXPECTED: &[&str] = &["struct", "map"];

/// Accepted shapes for a `self` or `related` link value
const LINK_EXPECTED: &[&str] = &["LinkObject", "string"];

/// Name of a JSON value's kind, as reported in type errors
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

/// Check that a meta value is map-like
///
/// Absent and `null` meta are valid.
pub fn check_meta(meta: Option<&Value>) -> Result<(), TypeError> {
    match meta {
        None | Some(Value::Null) | Some(Value::Object(_)) => Ok(()),
        Some(other) => Err(TypeError::new(json_kind(other), META_EXPECTED)),
    }
}

/// Check a `self` or `related` link value, returning whether it is empty
pub fn check_link_value(value: Option<&LinkValue>) -> Result<bool, TypeError> {
    match value {
        None => Ok(true),
        Some(LinkValue::Href(href)) => Ok(href.is_empty()),
        Some(LinkValue::Object(object)) => {
            check_meta(object.meta.as_ref())?;
            Ok(object.href.is_empty())
        }
        Some(LinkValue::Other(other)) => Err(TypeError::new(json_kind(other), LINK_EXPECTED)),
    }
}

impl Link {
    /// Validate this links object
    ///
    /// Fails when both `self` and `related` are empty. When exactly one is
    /// empty it is cleared so it is omitted on the wire.
    pub fn check(&mut self) -> Result<(), JsonApiError> {
        let self_is_empty = check_link_value(self.self_link.as_ref())?;
        let related_is_empty = check_link_value(self.related.as_ref())?;

        match (self_is_empty, related_is_empty) {
            (true, true) => return Err(JsonApiError::MissingLinkFields),
            (true, false) => self.self_link = None,
            (false, true) => self.related = None,
            (false, false) => {}
        }

        Ok(())
    }
}

impl Document {
    /// Validate top-level meta, the `jsonapi` object's meta and top-level links
    ///
    /// Empty `self`/`related` members of the top-level links are cleared.
    pub fn check(&mut self) -> Result<(), JsonApiError> {
        check_meta(self.meta.as_ref())?;

        if let Some(jsonapi) = &self.jsonapi {
            check_meta(jsonapi.meta.as_ref())?;
        }

        if let Some(links) = self.links.as_mut() {
            links.check()?;
        }

        #[cfg(feature = "logging")]
        debug!("Document passed meta and links checks");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkObject;
    use crate::types::JsonApiObject;
    use serde_json::json;

    #[test]
    fn test_check_meta_accepts_maps_and_absent() {
        assert!(check_meta(None).is_ok());
        assert!(check_meta(Some(&Value::Null)).is_ok());
        assert!(check_meta(Some(&json!({"count": 1}))).is_ok());
    }

    #[test]
    fn test_check_meta_rejects_scalars_and_arrays() {
        let err = check_meta(Some(&json!(7))).unwrap_err();
        assert_eq!(err, TypeError::new("number", &["struct", "map"]));

        let err = check_meta(Some(&json!(["a"]))).unwrap_err();
        assert_eq!(err.actual, "array");
    }

    #[test]
    fn test_check_link_value_shapes() {
        assert!(check_link_value(None).unwrap());
        assert!(check_link_value(Some(&LinkValue::Href(String::new()))).unwrap());
        assert!(!check_link_value(Some(&"/a".into())).unwrap());
        assert!(check_link_value(Some(&LinkObject::default().into())).unwrap());
        assert!(!check_link_value(Some(&LinkObject::new("/b").into())).unwrap());

        let err = check_link_value(Some(&LinkValue::Other(json!(true)))).unwrap_err();
        assert_eq!(err, TypeError::new("bool", &["LinkObject", "string"]));
    }

    #[test]
    fn test_check_link_value_validates_object_meta() {
        let object = LinkObject {
            href: "/a".into(),
            meta: Some(json!("not a map")),
        };
        let err = check_link_value(Some(&object.into())).unwrap_err();
        assert_eq!(err.actual, "string");
        assert_eq!(err.expected, vec!["struct".to_string(), "map".to_string()]);
    }

    #[test]
    fn test_link_check_both_empty() {
        let mut link = Link {
            self_link: Some("".into()),
            related: Some("".into()),
            ..Link::default()
        };
        assert!(matches!(link.check(), Err(JsonApiError::MissingLinkFields)));

        let mut link = Link::default();
        assert!(matches!(link.check(), Err(JsonApiError::MissingLinkFields)));
    }

    #[test]
    fn test_link_check_clears_empty_member() {
        let mut link = Link {
            self_link: Some("/a".into()),
            related: Some("".into()),
            ..Link::default()
        };
        link.check().unwrap();
        assert_eq!(link.self_link, Some(LinkValue::Href("/a".into())));
        assert_eq!(link.related, None);

        let mut link = Link {
            self_link: Some(LinkObject::default().into()),
            related: Some("/r".into()),
            ..Link::default()
        };
        link.check().unwrap();
        assert_eq!(link.self_link, None);
        assert_eq!(link.related, Some(LinkValue::Href("/r".into())));
    }

    #[test]
    fn test_link_check_keeps_both_when_set() {
        let mut link = Link::to_self("/a").with_related("/b");
        link.check().unwrap();
        assert!(link.self_link.is_some());
        assert!(link.related.is_some());
    }

    #[test]
    fn test_document_check() {
        let mut document = Document::new().with_meta(json!({"total": 3}));
        document.jsonapi = Some(JsonApiObject::new("1.0"));
        document.links = Some(Link {
            self_link: Some("".into()),
            related: Some("/people".into()),
            ..Link::default()
        });
        document.check().unwrap();
        assert_eq!(document.links.unwrap().self_link, None);

        let mut document = Document::new().with_meta(json!([1, 2]));
        assert!(matches!(document.check(), Err(JsonApiError::Type(_))));

        let mut document = Document::new();
        document.jsonapi = Some(JsonApiObject {
            version: "1.0".into(),
            meta: Some(json!(1)),
        });
        assert!(matches!(document.check(), Err(JsonApiError::Type(_))));
    }
}
