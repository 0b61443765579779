//! Search query construction
//!
//! Builds the querystring for the single search request:
//! `<base>?query=<topic>&limit=<pages * page_size>` followed by any extra
//! filter options in insertion order. Topic whitespace becomes `+`; options
//! with an absent value are omitted; list values are joined with commas.

/// Value of a single filter option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A plain string value, serialized as-is
    Single(String),

    /// A list value, joined with `,` before serialization
    List(Vec<String>),
}

impl FilterValue {
    fn serialize(&self) -> String {
        match self {
            FilterValue::Single(value) => value.clone(),
            FilterValue::List(values) => values.join(","),
        }
    }
}

/// Ordered bag of named filter options
///
/// Insertion order is preserved in the built query string. An option set to
/// `None` is carried in the bag but excluded when serializing.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    options: Vec<(String, Option<FilterValue>)>,
}

impl QueryOptions {
    /// Creates an empty option bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an option with a plain string value
    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.options
            .push((name.to_string(), Some(FilterValue::Single(value.to_string()))));
        self
    }

    /// Appends an option with a list value (comma-joined when serialized)
    pub fn set_list<S: Into<String>>(mut self, name: &str, values: Vec<S>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.options
            .push((name.to_string(), Some(FilterValue::List(values))));
        self
    }

    /// Appends an option with no value; it will be omitted from the query
    pub fn set_absent(mut self, name: &str) -> Self {
        self.options.push((name.to_string(), None));
        self
    }

    /// Iterates over the present options in insertion order
    pub fn present(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.options.iter().filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|v| (name.as_str(), v.serialize()))
        })
    }
}

/// Builds the full search request URL
///
/// # Arguments
///
/// * `base_url` - The search endpoint, without a query string
/// * `topic` - Topic to search; spaces are replaced with `+`
/// * `pages` - Number of result pages requested
/// * `page_size` - Results per page; `limit` is `pages * page_size`
/// * `options` - Extra filter options, appended in insertion order
pub fn build_search_url(
    base_url: &str,
    topic: &str,
    pages: u32,
    page_size: u32,
    options: &QueryOptions,
) -> String {
    let mut request = format!(
        "{}?query={}&limit={}",
        base_url,
        topic.replace(' ', "+"),
        pages * page_size
    );

    for (name, value) in options.present() {
        request.push('&');
        request.push_str(name);
        request.push('=');
        request.push_str(&value);
    }

    request
}
