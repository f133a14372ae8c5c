use crate::presentation::presenters::present_catalog;
use crate::presentation::{CommandResultViewModel, LabelStyle, Renderer};
use anyhow::Result;

pub fn handle(renderer: &impl Renderer) -> Result<()> {
    renderer.render(
        CommandResultViewModel::new(present_catalog()),
        LabelStyle::Codes,
    )
}
