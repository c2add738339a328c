use clap::Parser;
use npm_sbom::application::dto::SbomRequest;
use npm_sbom::application::factories::{
    ListingSource, ListingSourceFactory, OutputTarget, PresenterFactory,
};
use npm_sbom::application::read_models::SbomReadModelBuilder;
use npm_sbom::application::use_cases::GenerateSbomUseCase;
use npm_sbom::adapters::outbound::console::StderrProgressReporter;
use npm_sbom::adapters::outbound::formatters::CycloneDxFormatter;
use npm_sbom::cli::Args;
use npm_sbom::config::{self, ConfigFile};
use npm_sbom::ports::outbound::{ListingOptions, ProgressReporter, SbomFormatter};
use npm_sbom::sbom_generation::domain::{BuildOptions, ComponentType, OmitType};
use npm_sbom::shared::error::{ExitCode, SbomError};
use npm_sbom::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        StderrProgressReporter::new().report_error(&error_report(&e));
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Fatal error text with the full cause chain
fn error_report(error: &anyhow::Error) -> String {
    let mut report = format!("\n❌ An error occurred:\n\n{}", error);

    let mut source = error.source();
    while let Some(err) = source {
        report.push_str(&format!("\n\nCaused by: {}", err));
        source = err.source();
    }

    report.push('\n');
    report
}

fn run(args: Args) -> Result<()> {
    let project_path = args.project_directory();
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let node_env = std::env::var("NODE_ENV").ok();
    let (build_options, listing_options) = resolve_options(&args, &config, node_env.as_deref());

    let source = ListingSource::from_input(args.input.clone());
    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&ListingSourceFactory::progress_message(&source));

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(
        ListingSourceFactory::create(source),
        StderrProgressReporter::new(),
    );

    let request = SbomRequest::new(project_path, build_options, listing_options)
        .with_verbose(args.verbose);
    let response = use_case.execute(request)?;

    progress_reporter.report("📝 Generating CycloneDX JSON format output...");
    let read_model = SbomReadModelBuilder::build(&response);
    let formatted_output = CycloneDxFormatter::new().format(&read_model)?;

    let target = OutputTarget::from_output_file(args.output_file.clone());
    let writes_file = matches!(target, OutputTarget::File(_));
    PresenterFactory::create(target).present(&formatted_output)?;

    if writes_file {
        progress_reporter.report_completion(&format!(
            "✅ SBOM with {} component(s) written",
            response.component_count()
        ));
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise look for the default file in the project
fn load_config(args: &Args, project_path: &Path) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(project_path)?.unwrap_or_default()),
    }
}

/// Merges command-line arguments over the config file
fn resolve_options(
    args: &Args,
    config: &ConfigFile,
    node_env: Option<&str>,
) -> (BuildOptions, ListingOptions) {
    let omit = if !args.omit.is_empty() {
        args.omit.iter().copied().collect()
    } else if let Some(types) = config.omit_types() {
        types.into_iter().collect()
    } else if node_env == Some("production") {
        [OmitType::Dev].into_iter().collect()
    } else {
        Default::default()
    };

    let build_options = BuildOptions {
        omit,
        flatten_components: args.flatten_components || config.flatten_components.unwrap_or(false),
        short_purls: args.short_purls || config.short_purls.unwrap_or(false),
        reproducible: args.output_reproducible || config.output_reproducible.unwrap_or(false),
        root_component_type: args
            .mc_type
            .or_else(|| config.component_type())
            .unwrap_or(ComponentType::Application),
    };

    let listing_options = ListingOptions {
        omit: build_options.omit.clone(),
        package_lock_only: args.package_lock_only || config.package_lock_only.unwrap_or(false),
        workspaces: if args.workspaces.is_empty() {
            config.workspaces.clone().unwrap_or_default()
        } else {
            args.workspaces.clone()
        },
        ignore_npm_errors: args.ignore_npm_errors || config.ignore_npm_errors.unwrap_or(false),
    };

    (build_options, listing_options)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("npm-sbom").chain(list.iter().copied())).unwrap()
    }

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let result = validate_project_path(Path::new("/nonexistent/path/that/does/not/exist"));
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err_string = format!("{}", validate_project_path(&file_path).unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }

    #[test]
    fn test_error_report_includes_cause_chain() {
        let error = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "npm-ls.json",
        ))
        .context("Failed to read listing");

        let report = error_report(&error);
        assert!(report.contains("An error occurred"));
        assert!(report.contains("Failed to read listing"));
        assert!(report.contains("Caused by: npm-ls.json"));
    }

    #[test]
    fn test_resolve_options_defaults() {
        let (build, listing) = resolve_options(&args(&[]), &ConfigFile::default(), None);
        assert!(build.omit.is_empty());
        assert_eq!(build.root_component_type, ComponentType::Application);
        assert!(!listing.package_lock_only);
        assert!(listing.workspaces.is_empty());
    }

    #[test]
    fn test_resolve_options_node_env_production_omits_dev() {
        let (build, listing) =
            resolve_options(&args(&[]), &ConfigFile::default(), Some("production"));
        assert!(build.omits(OmitType::Dev));
        assert!(listing.omit.contains(&OmitType::Dev));
    }

    #[test]
    fn test_resolve_options_explicit_omit_beats_node_env() {
        let (build, _) = resolve_options(
            &args(&["--omit", "peer"]),
            &ConfigFile::default(),
            Some("production"),
        );
        assert!(build.omits(OmitType::Peer));
        assert!(!build.omits(OmitType::Dev));
    }

    #[test]
    fn test_resolve_options_cli_overrides_config() {
        let config = ConfigFile {
            omit: Some(vec!["optional".to_string()]),
            mc_type: Some("firmware".to_string()),
            workspaces: Some(vec!["packages/a".to_string()]),
            flatten_components: Some(true),
            ..Default::default()
        };

        let (build, listing) = resolve_options(
            &args(&["--omit", "dev", "--mc-type", "library", "-w", "packages/b"]),
            &config,
            None,
        );
        assert_eq!(build.omit.iter().copied().collect::<Vec<_>>(), vec![OmitType::Dev]);
        assert_eq!(build.root_component_type, ComponentType::Library);
        assert_eq!(listing.workspaces, vec!["packages/b"]);
        assert!(build.flatten_components);
    }

    #[test]
    fn test_resolve_options_config_fills_gaps() {
        let config = ConfigFile {
            omit: Some(vec!["optional".to_string()]),
            short_purls: Some(true),
            output_reproducible: Some(true),
            package_lock_only: Some(true),
            ignore_npm_errors: Some(true),
            ..Default::default()
        };

        let (build, listing) = resolve_options(&args(&[]), &config, Some("production"));
        assert!(build.omits(OmitType::Optional));
        assert!(!build.omits(OmitType::Dev));
        assert!(build.short_purls);
        assert!(build.reproducible);
        assert!(listing.package_lock_only);
        assert!(listing.ignore_npm_errors);
    }
}
