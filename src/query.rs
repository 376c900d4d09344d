use url::Url;

/// Optional query parameters for one request.
///
/// Parameters whose value is `None` are dropped, so an unset filter never
/// shows up as `key=` on the wire.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opt_str(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    pub fn opt_int(mut self, key: &'static str, value: Option<u64>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Add `page` and `per_page`
    pub fn pagination(self, page: Option<u64>, per_page: Option<u64>) -> Self {
        self.opt_int("page", page).opt_int("per_page", per_page)
    }

    /// Append the parameters to `url`, form-urlencoded
    pub fn apply(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
    }
}
