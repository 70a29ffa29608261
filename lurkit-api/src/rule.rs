/// A community rule, shown in the sidebar. Static display record.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Rule {
    pub id: u32,
    pub title: String,
    pub description: String,
}
