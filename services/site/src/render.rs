use crate::infra::copyright_year;
use crate::pages;
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use youth_advocacy::error::AppError;
use youth_advocacy::intake::ApplicationForm;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Destination file; the page is written to stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let html = render_landing_page();

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub(crate) fn render_landing_page() -> String {
    pages::landing_page(&ApplicationForm::new(), None, copyright_year()).into_string()
}
