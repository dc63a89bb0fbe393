use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub(crate) mod cross_ref;
pub(crate) mod google_books;

pub trait Client
where
    Self: Default,
{
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        send(self, url).and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

fn send(client: &reqwest::blocking::Client, url: &str) -> Result<reqwest::blocking::Response, Error> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

    match status_error(resp.status(), url) {
        Some(err) => Err(err),
        None => Ok(resp),
    }
}

/// Maps a response status to the error it stands for, [`None`] for a successful response.
fn status_error(status: StatusCode, url: &str) -> Option<Error> {
    if status == StatusCode::NOT_FOUND {
        // Crossref answers an unknown identifier with a 404 and a plain text body
        Some(Error::new(
            ErrorKind::NoValue,
            format!("Nothing found at '{url}'"),
        ))
    } else if status.is_client_error() || status.is_server_error() {
        Some(Error::new(
            ErrorKind::IO,
            format!("Request to '{url}' failed with status {status}"),
        ))
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};
