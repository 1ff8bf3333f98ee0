use url::Url;

pub const SHARE_TITLE: &str = "SaaS Business Valuation";

pub fn share_text(valuation: &str) -> String {
    format!("I just valued a SaaS business at {valuation}! Check out this valuation tool.")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    X,
    Linkedin,
    Reddit,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::X, ShareTarget::Linkedin, ShareTarget::Reddit];

    pub fn name(&self) -> &'static str {
        match self {
            ShareTarget::X => "X",
            ShareTarget::Linkedin => "LinkedIn",
            ShareTarget::Reddit => "Reddit",
        }
    }

    /// Share-intent link for `valuation`, pointing readers at `page`.
    ///
    /// X takes free text and works without a page; the others need one and
    /// return `None` without it.
    pub fn intent_url(&self, page: Option<&Url>, valuation: &str) -> Option<Url> {
        let text = share_text(valuation);
        let page = page.map(Url::as_str);

        let url = match (self, page) {
            (ShareTarget::X, Some(page)) => Url::parse_with_params(
                "https://twitter.com/intent/tweet",
                &[("url", page), ("text", text.as_str())],
            ),
            (ShareTarget::X, None) => Url::parse_with_params(
                "https://twitter.com/intent/tweet",
                &[("text", text.as_str())],
            ),
            (ShareTarget::Linkedin, Some(page)) => Url::parse_with_params(
                "https://www.linkedin.com/shareArticle",
                &[
                    ("mini", "true"),
                    ("url", page),
                    ("title", SHARE_TITLE),
                    ("summary", text.as_str()),
                ],
            ),
            (ShareTarget::Reddit, Some(page)) => Url::parse_with_params(
                "https://www.reddit.com/submit",
                &[("url", page), ("title", SHARE_TITLE)],
            ),
            (ShareTarget::Linkedin | ShareTarget::Reddit, None) => return None,
        };
        url.ok()
    }
}

/// Every target that can be linked with the given page, in display order.
pub fn share_links(page: Option<&Url>, valuation: &str) -> Vec<(ShareTarget, Url)> {
    ShareTarget::ALL
        .into_iter()
        .filter_map(|target| target.intent_url(page, valuation).map(|url| (target, url)))
        .collect()
}
