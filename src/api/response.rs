use serde::Deserialize;

/// One page of a paged list endpoint.
#[derive(Debug, Deserialize)]
pub struct PagedResponse {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(rename = "_links", default)]
    pub links: Option<PageLinks>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageLinks {
    pub next: Option<Link>,
}

#[derive(Debug, Deserialize)]
pub struct Link {
    pub href: String,
}

impl PagedResponse {
    pub fn next_link(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_ref())
            .map(|link| link.href.as_str())
            .filter(|href| !href.is_empty())
    }
}
