use crate::data_models::SearchCorrection;
use crate::dom::QueryNode;
use crate::links;

const CORRECTION_CONTAINER: &str = "#scc";
const CORRECTION_LABEL: &str = ".EE3Upf, p > span";

pub fn extract_correction<N: QueryNode>(root: &N) -> SearchCorrection {
    let Some(container) = root.select_one(CORRECTION_CONTAINER) else {
        log::debug!("no search correction on page");
        return SearchCorrection::default();
    };

    // "Did you mean: foobar" -> "Did you mean"
    let label = container
        .select_one(CORRECTION_LABEL)
        .map(|label| label.text())
        .unwrap_or_default();
    let title = label.split(':').next().unwrap_or_default().trim().to_string();

    let correct_search_term = container
        .select_one("a")
        .and_then(|a| a.attr("href"))
        .and_then(|href| links::query_param(&href, "q"))
        .unwrap_or_default();

    SearchCorrection {
        present: true,
        title,
        correct_search_term,
    }
}
