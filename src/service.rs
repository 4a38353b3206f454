use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::data_models::{CaptchaPage, ImagesPage, SearchPage, VideosPage};
use crate::diagnostics::Parsed;
use crate::dom::Document;
use crate::error::{FetchError, ParseError, ServiceError};
use crate::offset::OFFSET_PARAM;
use crate::parser;

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

/// Which result page of the upstream service to query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SearchKind {
    #[default]
    All,
    Images,
    Videos,
}

impl SearchKind {
    /// Reads the upstream `tbm` parameter; an empty value means all results.
    pub fn from_tbm(tbm: &str) -> Option<SearchKind> {
        match tbm {
            "" => Some(SearchKind::All),
            "isch" => Some(SearchKind::Images),
            "vid" => Some(SearchKind::Videos),
            _ => None,
        }
    }

    pub fn tbm(self) -> Option<&'static str> {
        match self {
            SearchKind::All => None,
            SearchKind::Images => Some("isch"),
            SearchKind::Videos => Some("vid"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::All => "All",
            SearchKind::Images => "Images",
            SearchKind::Videos => "Videos",
        }
    }
}

/// Builds the upstream url for a query. `start` is only sent past the first page.
pub fn search_url(
    base: &str,
    term: &str,
    start: usize,
    kind: SearchKind,
) -> Result<String, FetchError> {
    let mut url = Url::parse(base).map_err(|_| FetchError::InvalidUrl(base.to_string()))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("q", term);
        if start > 0 {
            query.append_pair(OFFSET_PARAM, &start.to_string());
        }
        if let Some(tbm) = kind.tbm() {
            query.append_pair("tbm", tbm);
        }
    }
    Ok(url.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: String,
}

/// Retrieves raw result documents.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedDocument, FetchError>> + Send;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(
        user_agent: &str,
        accept_language: &str,
        timeout: Duration,
    ) -> Result<HttpFetcher, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(accept_language)
                .map_err(|_| FetchError::InvalidHeader(accept_language.to_string()))?,
        );

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(HttpFetcher { client })
    }

    pub fn from_config(config: &Config) -> Result<HttpFetcher, FetchError> {
        Self::new(
            &config.user_agent,
            &config.accept_language,
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError> {
        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(FetchedDocument { status, body })
    }
}

/// Turns raw documents into pages.
pub trait PageExtractor {
    fn search_page(&self, html: &str) -> Result<Parsed<SearchPage>, ParseError>;
    fn images_page(&self, html: &str) -> Result<Parsed<ImagesPage>, ParseError>;
    fn videos_page(&self, html: &str) -> Result<Parsed<VideosPage>, ParseError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlExtractor;

impl PageExtractor for HtmlExtractor {
    fn search_page(&self, html: &str) -> Result<Parsed<SearchPage>, ParseError> {
        let document = Document::parse(html);
        let root = document.root();
        parser::parse_search_page(&root)
    }

    fn images_page(&self, html: &str) -> Result<Parsed<ImagesPage>, ParseError> {
        let document = Document::parse(html);
        let root = document.root();
        parser::parse_images_page(&root)
    }

    fn videos_page(&self, html: &str) -> Result<Parsed<VideosPage>, ParseError> {
        let document = Document::parse(html);
        let root = document.root();
        parser::parse_videos_page(&root)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResultPage {
    Search(SearchPage),
    Images(ImagesPage),
    Videos(VideosPage),
}

impl ResultPage {
    pub fn empty(kind: SearchKind) -> ResultPage {
        match kind {
            SearchKind::All => ResultPage::Search(SearchPage::default()),
            SearchKind::Images => ResultPage::Images(ImagesPage::default()),
            SearchKind::Videos => ResultPage::Videos(VideosPage::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Page(Parsed<ResultPage>),
    /// The upstream service asked for a captcha (HTTP 429).
    Captcha(CaptchaPage),
    UpstreamError {
        status: u16,
    },
}

/// Fetches a result page for a query and extracts it.
pub struct SearchService<F = HttpFetcher, E = HtmlExtractor> {
    fetcher: F,
    extractor: E,
    search_url: String,
}

impl SearchService {
    pub fn from_config(config: &Config) -> Result<SearchService, FetchError> {
        Ok(SearchService::new(
            HttpFetcher::from_config(config)?,
            HtmlExtractor,
            config.search_url.clone(),
        ))
    }
}

impl<F: Fetcher, E: PageExtractor> SearchService<F, E> {
    pub fn new(fetcher: F, extractor: E, search_url: impl Into<String>) -> Self {
        SearchService {
            fetcher,
            extractor,
            search_url: search_url.into(),
        }
    }

    pub async fn search(
        &self,
        term: &str,
        start: usize,
        kind: SearchKind,
    ) -> Result<SearchResponse, ServiceError> {
        // nothing to ask upstream for
        if term.trim().is_empty() {
            return Ok(SearchResponse::Page(Parsed::new(ResultPage::empty(kind))));
        }

        let url = search_url(&self.search_url, term, start, kind)?;
        log::info!("fetching search page: {url}");
        let fetched = self.fetcher.fetch(&url).await?;

        match StatusCode::from_u16(fetched.status) {
            Ok(StatusCode::OK) => {}
            Ok(StatusCode::TOO_MANY_REQUESTS) => {
                log::warn!("captcha requested for `{term}`");
                return Ok(SearchResponse::Captcha(CaptchaPage {
                    search_term: term.to_string(),
                    redirect_url: url,
                }));
            }
            _ => {
                log::error!("search response error with status: {}", fetched.status);
                return Ok(SearchResponse::UpstreamError {
                    status: fetched.status,
                });
            }
        }

        let page = self.extract(&fetched.body, kind)?;
        Ok(SearchResponse::Page(page))
    }

    fn extract(&self, body: &str, kind: SearchKind) -> Result<Parsed<ResultPage>, ParseError> {
        let page = match kind {
            SearchKind::All => self.extractor.search_page(body)?.map(ResultPage::Search),
            SearchKind::Images => self.extractor.images_page(body)?.map(ResultPage::Images),
            SearchKind::Videos => self.extractor.videos_page(body)?.map(ResultPage::Videos),
        };
        Ok(page)
    }
}
