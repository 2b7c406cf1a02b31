//! Interactive menu
//!
//! The numbered menu loop: check the connection, add a job from a template,
//! or exit. Failures are reported and the loop carries on; only end of input
//! or the exit choice leave it.

use anyhow::Result;
use colored::*;
use mrtux_client::JenkinsApi;
use mrtux_core::ServerConfig;
use mrtux_core::catalog::{CatalogError, TemplateCatalog, TemplateEntry};
use mrtux_core::domain::job::JobAnswers;
use mrtux_core::domain::prompt::JOB_PROMPT_STEPS;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::display;

/// Run the menu on stdin/stdout
pub async fn run_interactive(
    api: &dyn JenkinsApi,
    server: &ServerConfig,
    config: &Config,
) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    Menu::new(api, server, &config.templates_dir, stdin, stdout)
        .run()
        .await
}

/// Menu state: the gateway plus the streams it talks through
pub struct Menu<'a, R, W> {
    api: &'a dyn JenkinsApi,
    server: &'a ServerConfig,
    templates_dir: &'a Path,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        api: &'a dyn JenkinsApi,
        server: &'a ServerConfig,
        templates_dir: &'a Path,
        input: R,
        output: W,
    ) -> Self {
        Self {
            api,
            server,
            templates_dir,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        display::print_banner(
            &mut self.output,
            &self.server.jenkins_url,
            &self.server.username,
        )?;

        loop {
            writeln!(self.output, "{}", display::rule())?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.trim() {
                "1" => self.check_connection().await?,
                "2" => self.add_job().await?,
                "0" => break,
                _ => writeln!(self.output, "{}", "❌ Invalid choice!".red())?,
            }
        }

        writeln!(self.output, "👋 Bye!")?;
        Ok(())
    }

    /// Show `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn check_connection(&mut self) -> Result<()> {
        writeln!(self.output, "\n🔄 Testing connection...")?;

        match self.api.check_connection().await {
            Ok(()) => {
                display::print_success(&mut self.output, "Jenkins connection successful!")?;
                writeln!(self.output, "🌐 Server: {}", self.api.server_url())?;
            }
            Err(e) => display::print_failure(&mut self.output, "Connection failed", e)?,
        }
        Ok(())
    }

    async fn add_job(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "📝 Add New Jenkins Job".bold())?;

        let Some(answers) = self.ask_job_questions()? else {
            return Ok(());
        };

        let template = match self.choose_template()? {
            Some(Ok(template)) => template,
            Some(Err(e)) => {
                display::print_failure(&mut self.output, "Template selection failed", e)?;
                return Ok(());
            }
            None => return Ok(()),
        };

        let (job_name, params) = answers.into_request(self.server);
        display::print_job_summary(&mut self.output, &job_name, &params)?;

        match self.api.create_job(&job_name, &template.path, &params).await {
            Ok(message) => display::print_success(&mut self.output, &message)?,
            Err(e) => display::print_failure(&mut self.output, "Job creation failed", e)?,
        }
        Ok(())
    }

    /// Walk the questionnaire, asking again after a rejected answer
    fn ask_job_questions(&mut self) -> Result<Option<JobAnswers>> {
        let mut answers = JobAnswers::default();

        for step in &JOB_PROMPT_STEPS {
            loop {
                let Some(raw) = self.prompt(&step.prompt_text())? else {
                    return Ok(None);
                };
                match step.resolve(&raw) {
                    Ok(value) => {
                        answers.set(step.field, value);
                        break;
                    }
                    Err(e) => writeln!(self.output, "{}", format!("❌ {}", e).red())?,
                }
            }
        }

        Ok(Some(answers))
    }

    /// Template submenu; the outer `None` means end of input
    fn choose_template(&mut self) -> Result<Option<Result<TemplateEntry, CatalogError>>> {
        let catalog = match TemplateCatalog::discover(self.templates_dir) {
            Ok(catalog) => catalog,
            Err(e) => return Ok(Some(Err(e))),
        };

        display::print_templates(&mut self.output, &catalog)?;
        let Some(choice) = self.prompt(&format!("Choose template (1-{}): ", catalog.len()))?
        else {
            return Ok(None);
        };

        Ok(Some(catalog.select(&choice).cloned()))
    }
}
