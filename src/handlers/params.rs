use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ViewTypeParams {
    pub(crate) view_type: String,
}
