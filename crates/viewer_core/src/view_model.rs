/// Everything the shell needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub loading: bool,
    pub can_submit: bool,
    /// Host of the scraped page, once a result exists.
    pub hostname: Option<String>,
    pub error: Option<String>,
    pub show_empty_state: bool,
    pub result: Option<ResultView>,
    pub notification: Option<String>,
    pub suggestions: Vec<SuggestionView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub url: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub interactions_json: String,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Section id, or its position when the backend sent none.
    pub key: String,
    pub label: String,
    pub kind: String,
    pub default_open: bool,
    pub body_json: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub url: String,
    pub label: String,
}
