use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, Uri},
};
use std::sync::Arc;
use std::time::Instant;

use crate::context;
use crate::data_models::{ImagesPage, SearchPage, VideosPage};
use crate::error::{ParseError, ServiceError};
use crate::service::{
    Fetcher, PageExtractor, ResultPage, SearchKind, SearchResponse as ServiceResponse,
    SearchService,
};

use super::models::{PageBody, SearchRequest, SearchResponse};

pub async fn search_handler<F, E>(
    State(service): State<Arc<SearchService<F, E>>>,
    Query(request): Query<SearchRequest>,
    uri: Uri,
) -> Result<Json<SearchResponse>, (StatusCode, String)>
where
    F: Fetcher + Send + Sync + 'static,
    E: PageExtractor + Send + Sync + 'static,
{
    let start_time = Instant::now();

    let term = request.q.unwrap_or_default();
    if term.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query cannot be empty".to_string()));
    }

    let tbm = request.tbm.unwrap_or_default();
    let kind = SearchKind::from_tbm(&tbm).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("Unsupported search type `{tbm}`"),
        )
    })?;

    let start = request
        .start
        .and_then(|start| start.trim().parse().ok())
        .unwrap_or_default();

    let current_url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let (page, warnings) = match service.search(&term, start, kind).await {
        Ok(ServiceResponse::Page(parsed)) => {
            let (page, warnings) = parsed.into_parts();
            (
                page_body(&page, &current_url),
                warnings.iter().map(ToString::to_string).collect(),
            )
        }
        Ok(ServiceResponse::Captcha(captcha)) => (
            PageBody::Captcha(context::captcha_page_context(&captcha)),
            Vec::new(),
        ),
        Ok(ServiceResponse::UpstreamError { status }) => {
            return Err((
                StatusCode::BAD_GATEWAY,
                format!("Search service responded with status {status}"),
            ));
        }
        // zero results is an answer, not a failure
        Err(ServiceError::Parse(ParseError::EmptyResultSet { search_term })) => {
            tracing::info!(%term, "no results");
            (
                page_body(&empty_page(kind, search_term), &current_url),
                Vec::new(),
            )
        }
        Err(e) => {
            tracing::error!(%term, error = %e, "search failed");
            return Err((StatusCode::BAD_GATEWAY, format!("Search error: {}", e)));
        }
    };

    let processing_time_ms = start_time.elapsed().as_millis();
    tracing::info!(
        %term,
        kind = kind.label(),
        elapsed_ms = processing_time_ms as u64,
        "search served"
    );

    Ok(Json(SearchResponse {
        page,
        warnings,
        processing_time_ms,
    }))
}

fn empty_page(kind: SearchKind, search_term: String) -> ResultPage {
    match kind {
        SearchKind::All => ResultPage::Search(SearchPage {
            search_term,
            ..Default::default()
        }),
        SearchKind::Images => ResultPage::Images(ImagesPage {
            search_term,
            ..Default::default()
        }),
        SearchKind::Videos => ResultPage::Videos(VideosPage {
            search_term,
            ..Default::default()
        }),
    }
}

fn page_body(page: &ResultPage, current_url: &str) -> PageBody {
    match page {
        ResultPage::Search(page) => {
            PageBody::Search(context::search_page_context(page, current_url))
        }
        ResultPage::Images(page) => {
            PageBody::Images(context::images_page_context(page, current_url))
        }
        ResultPage::Videos(page) => {
            PageBody::Videos(context::videos_page_context(page, current_url))
        }
    }
}
