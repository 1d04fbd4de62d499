use std::collections::HashMap;

use crate::config::{DEFAULT_LANGUAGE, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Form inputs the product feed reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Page,
    Limit,
    Language,
    Brand,
    ProductName,
    Category,
}

impl InputField {
    /// Element id / form field name of the input.
    pub fn id(self) -> &'static str {
        match self {
            InputField::Page => "page",
            InputField::Limit => "limit",
            InputField::Language => "language",
            InputField::Brand => "brand",
            InputField::ProductName => "product_name",
            InputField::Category => "category",
        }
    }
}

/// Anything that can answer "what is in input X right now".
pub trait FormInputs {
    fn value(&self, field: InputField) -> Option<String>;
}

impl FormInputs for HashMap<String, String> {
    fn value(&self, field: InputField) -> Option<String> {
        self.get(field.id()).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub page: String,
    pub limit: String,
    pub language: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            limit: DEFAULT_LIMIT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Parameters of one product fetch. Values are opaque: the backend owns
/// validation of page and limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: String,
    pub limit: String,
    pub language: String,
    pub brand: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProductQuery {
    /// Read the current inputs. Missing or blank values fall back to `defaults`
    /// (filters fall back to "not sent").
    pub fn collect<I: FormInputs + ?Sized>(inputs: &I, defaults: &QueryDefaults) -> Self {
        Self {
            page: present(inputs.value(InputField::Page)).unwrap_or_else(|| defaults.page.clone()),
            limit: present(inputs.value(InputField::Limit)).unwrap_or_else(|| defaults.limit.clone()),
            language: present(inputs.value(InputField::Language)).unwrap_or_else(|| defaults.language.clone()),
            brand: present(inputs.value(InputField::Brand)),
            product_name: present(inputs.value(InputField::ProductName)),
            category: present(inputs.value(InputField::Category)),
        }
    }

    /// The query an untouched form would produce.
    pub fn from_defaults(defaults: &QueryDefaults) -> Self {
        Self::collect(&HashMap::<String, String>::new(), defaults)
    }

    /// Form-encoded request fields; filters are only sent when set.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (InputField::Page.id(), self.page.clone()),
            (InputField::Limit.id(), self.limit.clone()),
            (InputField::Language.id(), self.language.clone()),
        ];
        let filters = [
            (InputField::Brand, &self.brand),
            (InputField::ProductName, &self.product_name),
            (InputField::Category, &self.category),
        ];
        for (field, value) in filters {
            if let Some(v) = value {
                fields.push((field.id(), v.clone()));
            }
        }
        fields
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::from_defaults(&QueryDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_collect_reads_all_inputs() {
        let q = ProductQuery::collect(
            &inputs(&[("page", "3"), ("limit", "25"), ("language", "fr"), ("brand", "Lu")]),
            &QueryDefaults::default(),
        );
        assert_eq!(q.page, "3");
        assert_eq!(q.limit, "25");
        assert_eq!(q.language, "fr");
        assert_eq!(q.brand.as_deref(), Some("Lu"));
        assert_eq!(q.product_name, None);
    }

    #[test]
    fn test_collect_defaults_missing_and_blank() {
        let q = ProductQuery::collect(&inputs(&[("page", "  "), ("brand", "")]), &QueryDefaults::default());
        assert_eq!(q.page, "1");
        assert_eq!(q.limit, "100");
        assert_eq!(q.language, "en");
        assert_eq!(q.brand, None);
    }

    #[test]
    fn test_collect_keeps_opaque_values() {
        let q = ProductQuery::collect(&inputs(&[("page", "-4"), ("limit", "lots")]), &QueryDefaults::default());
        assert_eq!(q.page, "-4");
        assert_eq!(q.limit, "lots");
    }

    #[test]
    fn test_form_fields_skip_unset_filters() {
        let mut q = ProductQuery::default();
        assert_eq!(
            q.form_fields(),
            vec![("page", "1".to_string()), ("limit", "100".to_string()), ("language", "en".to_string())]
        );
        q.category = Some("snacks".into());
        assert_eq!(q.form_fields().last(), Some(&("category", "snacks".to_string())));
    }
}
