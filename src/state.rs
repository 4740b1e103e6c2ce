use crate::{PageContent, Settings};

pub struct SharedState {
    pub settings: Settings,
    pub content: PageContent,
}
