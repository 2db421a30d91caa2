//! Response shapes of the remote APIs.

use fake::{
    faker::address::en::{CountryCode, CountryName},
    Dummy, Fake, Faker,
};
use serde::{Deserialize, Serialize};

/// A country, restricted to the fields requested from the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Dummy)]
pub struct Country {
    /// The country's common name, such as "Peru".
    #[dummy(faker = "CountryName()")]
    pub name: String,

    /// The capital city. Some territories have none.
    #[serde(default)]
    pub capital: Option<String>,

    /// Number of inhabitants.
    #[dummy(faker = "1_000..2_000_000_000")]
    pub population: u64,

    /// Links to images of the country's flag.
    pub flags: Flags,

    /// The languages spoken in the country, in the order the API lists them.
    #[serde(default)]
    #[dummy(faker = "(Faker, 1..4)")]
    pub languages: Vec<Language>,
}

impl Country {
    /// The names of the country's languages, in response order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|language| language.name.as_str())
    }
}

/// Flag images for a country.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Flags {
    /// URL of an SVG rendition of the flag.
    pub svg: String,

    /// URL of a PNG rendition of the flag.
    #[serde(default)]
    pub png: Option<String>,
}

impl<F> Dummy<F> for Flags {
    fn dummy_with_rng<R: rand::Rng + ?Sized>(_config: &F, rng: &mut R) -> Self {
        let code: String = CountryCode()
            .fake_with_rng::<String, R>(rng)
            .to_lowercase();
        Self {
            svg: format!("https://flagcdn.com/{}.svg", code),
            png: Some(format!("https://flagcdn.com/w320/{}.png", code)),
        }
    }
}

/// A language spoken in a country.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Dummy)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// The English name of the language.
    #[dummy(faker = "fake::faker::lorem::en::Word()")]
    pub name: String,

    /// The language's name for itself.
    #[serde(default)]
    pub native_name: Option<String>,

    /// The two letter ISO 639-1 code.
    #[serde(default, rename = "iso639_1")]
    pub iso639_1: Option<String>,
}

/// A page of image search results.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSearchResponse {
    /// The total number of matching images.
    pub total: u64,

    /// The number of matching images that are reachable through the API.
    pub total_hits: u64,

    /// The images on this page.
    pub hits: Vec<ImageHit>,
}

/// A single image search result.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ImageHit {
    /// Pixabay's ID for the image.
    pub id: u64,

    /// The page on Pixabay showing the image.
    #[serde(rename = "pageURL")]
    pub page_url: String,

    /// Comma separated tags describing the image.
    #[serde(default)]
    pub tags: String,

    /// A medium sized rendition, at most 640 pixels wide.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,

    /// A large rendition, at most 1280 pixels wide.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,

    #[allow(missing_docs)]
    #[serde(default)]
    pub views: u64,

    #[allow(missing_docs)]
    #[serde(default)]
    pub downloads: u64,

    #[allow(missing_docs)]
    #[serde(default)]
    pub likes: u64,

    #[allow(missing_docs)]
    #[serde(default)]
    pub comments: u64,
}
