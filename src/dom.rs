use scraper::{ElementRef, Html, Selector};

/// Selector-based read access to a parsed HTML tree.
///
/// Extractors only talk to this trait, so they work over any tree library
/// that can answer these queries. Selector semantics follow CSS: `select_*`
/// match descendants of the node, never the node itself.
pub trait QueryNode: Sized + Clone {
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// First descendant matching `selector`, if any. Never fails on zero or
    /// multiple matches.
    fn select_one(&self, selector: &str) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    fn exists(&self, selector: &str) -> bool {
        self.select_one(selector).is_some()
    }

    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text of all descendant text nodes, untrimmed.
    fn text(&self) -> String;

    /// Element children, text nodes excluded.
    fn children(&self) -> Vec<Self>;

    fn parent(&self) -> Option<Self>;

    /// Whether the node itself matches `selector`.
    fn is(&self, selector: &str) -> bool;

    fn html(&self) -> String;
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::error!("invalid selector `{css}`: {e:?}");
            None
        }
    }
}

impl<'a> QueryNode for ElementRef<'a> {
    fn select_all(&self, selector: &str) -> Vec<Self> {
        match parse_selector(selector) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    fn select_one(&self, selector: &str) -> Option<Self> {
        let selector = parse_selector(selector)?;
        self.select(&selector).next()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn children(&self) -> Vec<Self> {
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn parent(&self) -> Option<Self> {
        (**self).parent().and_then(ElementRef::wrap)
    }

    fn is(&self, selector: &str) -> bool {
        parse_selector(selector).is_some_and(|selector| selector.matches(self))
    }

    fn html(&self) -> String {
        ElementRef::html(self)
    }
}

/// An owned, parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Document {
        Document {
            html: Html::parse_document(source),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}
