use crate::application::dto::InitRequest;
use crate::application::use_cases::{InitDocumentUseCase, ManageInfoUseCase, ManagePackagesUseCase};
use crate::cli::{render_usage, Commands, InfoVerb, PackageVerb};
use crate::ports::outbound::{DocumentStore, OutputPresenter, ProgressReporter};
use crate::shared::error::SbomError;
use crate::shared::json::to_indented_json;
use crate::shared::Result;

/// CommandRouter - dispatches parsed CLI commands to the use cases
///
/// Results are rendered as indented JSON and handed to the presenter.
pub struct CommandRouter<S, PR, OP> {
    store: S,
    progress_reporter: PR,
    presenter: OP,
}

impl<S, PR, OP> CommandRouter<S, PR, OP>
where
    S: DocumentStore,
    PR: ProgressReporter,
    OP: OutputPresenter,
{
    pub fn new(store: S, progress_reporter: PR, presenter: OP) -> Self {
        Self {
            store,
            progress_reporter,
            presenter,
        }
    }

    pub fn route(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Init { package_id, fields } => self.init(package_id, fields),
            Commands::Info { verb } => self.info(verb),
            Commands::Package { verb } => self.package(verb),
        }
    }

    fn init(&self, package_id: Option<String>, fields: Vec<String>) -> Result<()> {
        let package_id = package_id.ok_or_else(|| missing("a package name must be provided"))?;

        // `sbom init help` asks for usage; it can never be a real package with fields.
        if package_id == "help" && fields.is_empty() {
            let usage = render_usage(Some("init"));
            return self.presenter.present(usage.trim_end());
        }

        let use_case = InitDocumentUseCase::new(&self.store, &self.progress_reporter);
        let document = use_case.execute(InitRequest::new(package_id, fields))?;

        self.presenter.present(&document.to_json()?)
    }

    fn info(&self, verb: Option<InfoVerb>) -> Result<()> {
        let verb = verb.ok_or_else(|| missing("no verb has been provided"))?;
        let use_case = ManageInfoUseCase::new(&self.store, &self.progress_reporter);

        let view = match verb {
            InfoVerb::Ls => use_case.list()?,
            InfoVerb::Add { fields } => use_case.add(&fields)?,
            InfoVerb::Rm { fields } => use_case.remove(&fields)?,
        };

        self.presenter.present(&to_indented_json(&view)?)
    }

    fn package(&self, verb: Option<PackageVerb>) -> Result<()> {
        let verb = verb.ok_or_else(|| missing("no verb has been provided"))?;
        let use_case = ManagePackagesUseCase::new(&self.store, &self.progress_reporter);

        let listing = match verb {
            PackageVerb::Ls { name } => Some(use_case.list(name.as_deref())?),
            PackageVerb::Add { name, fields } => {
                let name = name.ok_or_else(|| missing("must provide package name"))?;
                Some(use_case.add(&name, &fields)?)
            }
            PackageVerb::Rm { name, fields } => {
                let name = name.ok_or_else(|| missing("must provide package name"))?;
                use_case.remove(&name, &fields)?
            }
        };

        match listing {
            Some(listing) => self.presenter.present(&to_indented_json(&listing)?),
            None => Ok(()),
        }
    }
}

fn missing(what: &str) -> anyhow::Error {
    SbomError::MissingArgument {
        what: what.to_string(),
    }
    .into()
}
