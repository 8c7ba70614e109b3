// Remote document store access over its REST surface
// Collections: `events` (shared) and `users/{uid}/saved_events` (per user,
// documents keyed by event name).

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};

use backend_domain::{
    Event, EventRepository, SavedEventRepository, StoreConfig, StoreError, UserId,
};

pub struct HttpDocumentStore {
    client: Client,
    base: Url,
    user: Option<String>,
    password: Option<String>,
}

impl HttpDocumentStore {
    pub fn new(config: &StoreConfig) -> anyhow::Result<Self> {
        let base = Url::parse(&format!(
            "{}/{}/",
            config.store_url.trim_end_matches('/'),
            config.store_database
        ))?;
        Ok(Self {
            client: Client::new(),
            base,
            user: config.store_user.clone(),
            password: config.store_password.clone(),
        })
    }

    /// Builds a collection/document URL; segments are percent-encoded, so
    /// event names with spaces are valid document keys.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.base.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|_| StoreError::Unavailable("store url cannot be a base".to_string()))?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(user) = &self.user {
            builder = builder.basic_auth(user, self.password.as_deref());
        }
        builder
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

fn status_error(status: StatusCode) -> StoreError {
    if status == StatusCode::NOT_FOUND {
        StoreError::NotFound
    } else {
        StoreError::Unavailable(format!("store responded {status}"))
    }
}

#[async_trait]
impl EventRepository for HttpDocumentStore {
    async fn fetch_events(&self) -> Result<Vec<Event>, StoreError> {
        let url = self.url(&["events"])?;
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        response.json::<Vec<Event>>().await.map_err(transport_error)
    }

    async fn insert_events(&self, events: &[Event]) -> Result<(), StoreError> {
        // One request, one batch: the store applies the array atomically.
        let url = self.url(&["events"])?;
        let response = self
            .request(Method::POST, url)
            .json(events)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let url = self.url(&["events"])?;
        let response = self
            .request(Method::HEAD, url)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }
}

#[async_trait]
impl SavedEventRepository for HttpDocumentStore {
    async fn upsert_saved(&self, user: &UserId, event: &Event) -> Result<(), StoreError> {
        let url = self.url(&["users", user.as_str(), "saved_events", &event.name])?;
        let response = self
            .request(Method::PUT, url)
            .json(event)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }

    async fn saved_exists(&self, user: &UserId, name: &str) -> Result<bool, StoreError> {
        let url = self.url(&["users", user.as_str(), "saved_events", name])?;
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(transport_error)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(status_error(status)),
        }
    }

    async fn fetch_saved(&self, user: &UserId) -> Result<Vec<Event>, StoreError> {
        let url = self.url(&["users", user.as_str(), "saved_events"])?;
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(transport_error)?;
        match response.status() {
            // A user with no saved subcollection yet reads as empty.
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status if status.is_success() => {
                response.json::<Vec<Event>>().await.map_err(transport_error)
            }
            status => Err(status_error(status)),
        }
    }

    async fn delete_saved(&self, user: &UserId, name: &str) -> Result<(), StoreError> {
        let url = self.url(&["users", user.as_str(), "saved_events", name])?;
        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(transport_error)?;
        match response.status() {
            // Deleting an absent document is a no-op, as in the source store.
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(status_error(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HttpDocumentStore {
        HttpDocumentStore::new(&StoreConfig {
            store_url: "http://127.0.0.1:8787".to_string(),
            store_database: "eventboard".to_string(),
            store_user: None,
            store_password: None,
        })
        .expect("store")
    }

    #[test]
    fn collection_urls_include_the_database() {
        let url = store().url(&["events"]).expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:8787/eventboard/events");
    }

    #[test]
    fn document_keys_with_spaces_are_percent_encoded() {
        let url = store()
            .url(&["users", "u-1", "saved_events", "Food Carnival"])
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8787/eventboard/users/u-1/saved_events/Food%20Carnival"
        );
    }
}
