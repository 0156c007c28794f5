//! In-memory storefront for unit tests.
//!
//! The state is rendered to HTML on every lookup and queried with `scraper`,
//! so the default selectors are exercised against real markup. Actionable
//! controls carry a `data-mock-action` attribute telling `click` what to do.

use crate::driver::AutomationDriver;
use crate::error::DriverError;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Mutex;

/// Snapshot of an element taken when it was located
#[derive(Debug, Clone)]
pub(crate) struct MockElement {
    text: String,
    attributes: HashMap<String, String>,
}

impl MockElement {
    fn action(&self) -> Option<&str> {
        self.attributes.get("data-mock-action").map(String::as_str)
    }
}

#[derive(Debug, Default)]
struct State {
    pages: Vec<Vec<String>>,
    current_page: usize,
    show_results: bool,
    query: String,
    submitted_queries: Vec<String>,
    cart: Vec<String>,
    cart_open: bool,
    confirm_shown: bool,
    extra_page_labels: Vec<String>,
    hide_empty_cart_button: bool,
    hide_next_control: bool,
    actions: Vec<String>,
}

pub(crate) struct MockStorefront {
    state: Mutex<State>,
}

impl MockStorefront {
    /// Storefront whose search returns the given pages of titles
    pub(crate) fn new(pages: &[&[&str]]) -> Self {
        let pages = pages
            .iter()
            .map(|page| page.iter().map(|t| t.to_string()).collect())
            .collect();
        Self {
            state: Mutex::new(State {
                pages,
                current_page: 1,
                ..State::default()
            }),
        }
    }

    /// Storefront already showing page 1 of the results
    pub(crate) fn with_results(pages: &[&[&str]]) -> Self {
        let storefront = Self::new(pages);
        storefront.state.lock().unwrap().show_results = true;
        storefront
    }

    /// Adds a pagination entry rendered before the "next" control
    pub(crate) fn with_page_label(self, label: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .extra_page_labels
            .push(label.to_string());
        self
    }

    /// Renders the empty-cart button with the `hidden` attribute
    pub(crate) fn with_hidden_empty_cart_button(self) -> Self {
        self.state.lock().unwrap().hide_empty_cart_button = true;
        self
    }

    /// Renders the pagination control without its "next" entry
    pub(crate) fn without_next_control(self) -> Self {
        self.state.lock().unwrap().hide_next_control = true;
        self
    }

    pub(crate) fn current_page(&self) -> usize {
        self.state.lock().unwrap().current_page
    }

    pub(crate) fn cart(&self) -> Vec<String> {
        self.state.lock().unwrap().cart.clone()
    }

    pub(crate) fn submitted_queries(&self) -> Vec<String> {
        self.state.lock().unwrap().submitted_queries.clone()
    }

    /// Every click performed, as `data-mock-action` values
    pub(crate) fn actions(&self) -> Vec<String> {
        self.state.lock().unwrap().actions.clone()
    }

    fn query(&self, selector: &str) -> Result<Vec<MockElement>, DriverError> {
        let html = Html::parse_document(&self.state.lock().unwrap().render());
        let selector = Selector::parse(selector)
            .map_err(|e| DriverError::Command(format!("invalid selector {}: {:?}", selector, e)))?;

        Ok(html
            .select(&selector)
            .map(|el| MockElement {
                text: el.text().collect::<String>().trim().to_string(),
                attributes: el
                    .value()
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
            .collect())
    }
}

impl State {
    fn render(&self) -> String {
        let mut html = String::from("<html><body><header>");
        let _ = write!(
            html,
            "<form><input name=\"searchval\" value=\"{}\" data-mock-action=\"search\"></form>",
            escape(&self.query)
        );
        let _ = write!(
            html,
            "<a aria-label=\"Your cart, {} items\" data-mock-action=\"open-cart\">Cart</a>",
            self.cart.len()
        );
        html.push_str("</header><main>");

        if self.cart_open {
            self.render_cart(&mut html);
        } else if self.show_results {
            self.render_results(&mut html);
        }

        html.push_str("</main></body></html>");
        html
    }

    fn render_results(&self, html: &mut String) {
        let total: usize = self.pages.iter().map(Vec::len).sum();
        let _ = write!(
            html,
            "<h1 class=\"page-header search--title\">{} ({} results)</h1>",
            escape(&self.query),
            total
        );

        html.push_str("<div id=\"product_listing\">");
        if let Some(titles) = self.pages.get(self.current_page - 1) {
            for (i, title) in titles.iter().enumerate() {
                let _ = write!(
                    html,
                    "<div><span data-testid=\"itemDescription\">{}</span>\
                     <input type=\"submit\" value=\"Add to Cart\" data-mock-action=\"add:{}\"></div>",
                    escape(title),
                    i + 1
                );
            }
        }
        html.push_str("</div>");

        let last = self.pages.len();
        if last < 2 {
            return;
        }

        html.push_str("<div id=\"paging\"><ul>");
        if self.current_page > 1 {
            let _ = write!(
                html,
                "<li><a aria-label=\"previous page\" data-mock-action=\"page:{}\">&lsaquo;</a></li>",
                self.current_page - 1
            );
        }
        for page in 1..=last {
            let label = match (page == self.current_page, page == last) {
                (true, true) => format!("current page, last page, page {}", page),
                (true, false) => format!("current page, page {}", page),
                (false, true) => format!("last page, page {}", page),
                (false, false) => format!("page {}", page),
            };
            let _ = write!(
                html,
                "<li><a aria-label=\"{}\" data-mock-action=\"page:{}\">{}</a></li>",
                label, page, page
            );
        }
        for label in &self.extra_page_labels {
            let _ = write!(html, "<li><a aria-label=\"{}\">&hellip;</a></li>", escape(label));
        }
        if !self.hide_next_control {
            html.push_str(
                "<li><a aria-label=\"next page\" data-mock-action=\"next\">&rsaquo;</a></li>",
            );
        }
        html.push_str("</ul></div>");
    }

    fn render_cart(&self, html: &mut String) {
        html.push_str("<div class=\"cartItems\"><ul>");
        for (i, description) in self.cart.iter().enumerate() {
            let _ = write!(
                html,
                "<li data-cart-item-id=\"{}\"><span class=\"itemDescription description overflow-visible\">\
                 <a>{}</a></span></li>",
                i + 100,
                escape(description)
            );
        }
        html.push_str("</ul>");
        if !self.cart.is_empty() {
            let hidden = if self.hide_empty_cart_button { " hidden" } else { "" };
            let _ = write!(
                html,
                "<button class=\"emptyCartButton\" data-mock-action=\"empty-cart\"{}>Empty Cart</button>",
                hidden
            );
        }
        html.push_str("</div>");

        if self.confirm_shown {
            html.push_str(
                "<footer><button data-mock-action=\"confirm-empty\">Empty Cart</button>\
                 <button>Cancel</button></footer>",
            );
        }
        if self.cart.is_empty() {
            html.push_str("<div class=\"empty-cart__inner\">Your cart is empty</div>");
        }
    }

    fn perform(&mut self, action: &str) {
        self.actions.push(action.to_string());
        match action.split_once(':') {
            Some(("page", page)) => {
                self.current_page = page.parse().unwrap();
            }
            Some(("add", index)) => {
                let index: usize = index.parse().unwrap();
                let title = self.pages[self.current_page - 1][index - 1].clone();
                self.cart.push(title);
            }
            _ => match action {
                "next" if self.current_page < self.pages.len() => self.current_page += 1,
                "open-cart" => self.cart_open = true,
                "empty-cart" => self.confirm_shown = true,
                "confirm-empty" => {
                    self.cart.clear();
                    self.confirm_shown = false;
                }
                _ => {}
            },
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[async_trait]
impl AutomationDriver for MockStorefront {
    type Element = MockElement;

    async fn goto(&self, _url: &str) -> Result<(), DriverError> {
        let mut state = self.state.lock().unwrap();
        state.show_results = false;
        state.cart_open = false;
        Ok(())
    }

    async fn locate(&self, selector: &str) -> Result<Option<MockElement>, DriverError> {
        Ok(self.query(selector)?.into_iter().next())
    }

    async fn locate_all(&self, selector: &str) -> Result<Vec<MockElement>, DriverError> {
        self.query(selector)
    }

    async fn text(&self, element: &MockElement) -> Result<String, DriverError> {
        Ok(element.text.clone())
    }

    async fn attribute(
        &self,
        element: &MockElement,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        Ok(element.attributes.get(name).cloned())
    }

    async fn click(&self, element: &MockElement) -> Result<(), DriverError> {
        if let Some(action) = element.action() {
            self.state.lock().unwrap().perform(action);
        }
        Ok(())
    }

    async fn send_keys(&self, element: &MockElement, text: &str) -> Result<(), DriverError> {
        if element.action() == Some("search") {
            self.state.lock().unwrap().query.push_str(text);
        }
        Ok(())
    }

    async fn clear(&self, element: &MockElement) -> Result<(), DriverError> {
        if element.action() == Some("search") {
            self.state.lock().unwrap().query.clear();
        }
        Ok(())
    }

    async fn submit(&self, element: &MockElement) -> Result<(), DriverError> {
        if element.action() == Some("search") {
            let mut state = self.state.lock().unwrap();
            let query = state.query.clone();
            state.submitted_queries.push(query);
            state.show_results = true;
            state.cart_open = false;
            state.current_page = 1;
        }
        Ok(())
    }

    async fn is_displayed(&self, element: &MockElement) -> Result<bool, DriverError> {
        Ok(!element.attributes.contains_key("hidden"))
    }
}
