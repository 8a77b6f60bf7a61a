use crate::domain::ProfileSummary;

pub trait Renderer: Send + Sync {
    fn render(&self, summary: &ProfileSummary) -> String;
}
