mod config;
mod logging;
mod views;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use config::AppConfig;
use effect_studio_adapters::{
    present_decoded, present_effect_schema, present_listing, present_pipeline, read_upload,
    save_blob, HttpImageGateway, ImageCrateDecoder,
};
use effect_studio_application::{
    ApplicationError, ApplicationService, DeleteImageCommand, FetchImageCommand, ImageListQuery,
    ListImagesCommand, OpenImageCommand, PipelineSession, RenderPipelineCommand,
    UploadImageCommand,
};
use effect_studio_domain::{catalog, DomainError, Effect, ImageId, Route};

#[derive(Debug, Parser)]
#[command(
    name = "effect-studio",
    version,
    about = "Apply effect pipelines to images held by a rendering backend"
)]
struct Cli {
    /// Backend base URL (overrides EFFECT_STUDIO_BASE_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides EFFECT_STUDIO_TIMEOUT_SECS).
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Print every effect with its parameters.
    Effects,
    /// List gallery images.
    List {
        #[arg(long, requires = "size")]
        index: Option<u64>,
        #[arg(long, requires = "index")]
        size: Option<u32>,
        #[arg(long = "type", requires = "name")]
        image_type: Option<String>,
        #[arg(long, requires = "image_type")]
        name: Option<String>,
    },
    /// Download an image unchanged.
    Get {
        id: i64,
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Render an image through a pipeline of effects.
    ///
    /// Each effect is `type[:key=value[,key=value...]]`, applied in order.
    Render {
        id: i64,
        #[arg(short, long = "effect", required = true)]
        effects: Vec<String>,
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Upload a JPEG or PNG file.
    Upload { file: PathBuf },
    /// Delete an image.
    Delete { id: i64 },
    /// Open a view by path: `/`, `/gallery` or `/image/<id>`.
    Navigate { path: String },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

impl From<ApplicationError> for CommandError {
    fn from(error: ApplicationError) -> Self {
        if error.is_incomplete_pipeline() {
            return Self::Runtime(
                "pipeline incomplete: every choice parameter needs a value".to_string(),
            );
        }
        Self::Runtime(error.to_string())
    }
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();
    let config = apply_overrides(AppConfig::from_env(), &cli);

    let service = match build_application_service(&config) {
        Ok(service) => service,
        Err(error) => {
            eprintln!("failed to start effect-studio: {error}");
            return ExitCode::from(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("failed to start async runtime: {error}");
            return ExitCode::from(1);
        }
    };

    let mut session = PipelineSession::new();
    match runtime.block_on(run_command(cli.command, &service, &mut session, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    config
}

fn build_application_service(config: &AppConfig) -> Result<ApplicationService, ApplicationError> {
    let gateway =
        HttpImageGateway::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    Ok(ApplicationService::new(
        Box::new(gateway),
        Box::new(ImageCrateDecoder),
        config.base_url.clone(),
    ))
}

fn image_id(raw: i64) -> Result<ImageId, CommandError> {
    ImageId::new(raw).map_err(|error| CommandError::Usage(format!("invalid image id: {error}")))
}

fn list_query(
    index: Option<u64>,
    size: Option<u32>,
    image_type: Option<String>,
    name: Option<String>,
) -> Result<ImageListQuery, CommandError> {
    match (index, size, image_type, name) {
        (_, _, Some(image_type), Some(name)) => Ok(ImageListQuery::Filtered { image_type, name }),
        (Some(index), Some(size), None, None) => Ok(ImageListQuery::Page { index, size }),
        (None, None, None, None) => Ok(ImageListQuery::All),
        _ => Err(CommandError::Usage(
            "use --index with --size, or --type with --name".to_string(),
        )),
    }
}

/// Parses `type[:key=value[,key=value...]]` into a configured effect.
fn parse_effect_arg(arg: &str) -> Result<Effect, CommandError> {
    let (type_name, assignments) = arg.split_once(':').unwrap_or((arg, ""));
    let type_name = type_name.trim();
    if catalog::lookup(type_name).is_none() {
        return Err(CommandError::Usage(format!("unknown effect type: {type_name}")));
    }

    let mut effect = Effect::from_type_name(type_name);
    for assignment in assignments.split(',').filter(|part| !part.trim().is_empty()) {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            CommandError::Usage(format!(
                "expected key=value in effect {type_name}, got {assignment}"
            ))
        })?;
        effect
            .set_param(key.trim(), value.trim())
            .map_err(|error: DomainError| CommandError::Usage(error.to_string()))?;
    }
    Ok(effect)
}

async fn run_command(
    command: Command,
    service: &ApplicationService,
    session: &mut PipelineSession,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command {
        Command::Effects => {
            for schema in catalog::all() {
                for line in present_effect_schema(schema) {
                    println!("{line}");
                }
            }
            Ok(())
        }
        Command::List {
            index,
            size,
            image_type,
            name,
        } => {
            let query = list_query(index, size, image_type, name)?;
            let listing = service.list_images(ListImagesCommand { query }).await?;
            for line in present_listing(&listing) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Get { id, output_dir } => {
            let image_id = image_id(id)?;
            let blob = service.fetch_image(FetchImageCommand { image_id }).await?;
            let decoded = service.describe_image(&blob)?;
            let dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let path = save_blob(&dir, &format!("image-{id}"), &blob)?;
            println!("{}", present_decoded(&path.display().to_string(), &decoded));
            Ok(())
        }
        Command::Render {
            id,
            effects,
            output_dir,
        } => {
            let image_id = image_id(id)?;
            for arg in &effects {
                session.pipeline_mut().push(parse_effect_arg(arg)?);
            }
            // Reject before any request reaches the backend.
            session.pipeline().to_query().map_err(ApplicationError::from)?;
            service
                .open_image(session, OpenImageCommand { image_id })
                .await?;
            log::info!("pipeline: {}", present_pipeline(session.pipeline()));

            let blob = service
                .render_pipeline(session, RenderPipelineCommand)
                .await?;
            let decoded = service.describe_image(&blob)?;
            let dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let stem = format!("image-{id}-{}", session.pipeline().algorithm());
            let path = save_blob(&dir, &stem, &blob)?;
            println!("{}", present_decoded(&path.display().to_string(), &decoded));
            Ok(())
        }
        Command::Upload { file } => {
            let upload = read_upload(&file)?;
            let message = service
                .upload_image(session, UploadImageCommand { upload })
                .await?;
            if session.take_uploaded() {
                log::info!("uploaded {}", file.display());
            }
            println!("{message}");
            Ok(())
        }
        Command::Delete { id } => {
            let image_id = image_id(id)?;
            let message = service
                .delete_image(session, DeleteImageCommand { image_id })
                .await?;
            if session.take_deleted() {
                log::info!("deleted image {id}");
            }
            println!("{message}");
            Ok(())
        }
        Command::Navigate { path } => {
            let route = Route::resolve(&path)
                .ok_or_else(|| CommandError::Usage(format!("no view for path: {path}")))?;
            log::info!("navigating to {route}");
            for line in views::render(route, service, session).await? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use effect_studio_domain::EffectType;

    use super::*;

    #[test]
    fn parse_render_command_with_effects() {
        let cli = Cli::try_parse_from([
            "effect-studio",
            "render",
            "4",
            "-e",
            "sobel:color=Color",
            "--effect",
            "threshold:threshold=100",
        ])
        .expect("render should parse");
        match cli.command {
            Command::Render { id, effects, .. } => {
                assert_eq!(id, 4);
                assert_eq!(effects, vec!["sobel:color=Color", "threshold:threshold=100"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn render_requires_an_effect() {
        assert!(Cli::try_parse_from(["effect-studio", "render", "4"]).is_err());
    }

    #[test]
    fn parse_get_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["effect-studio", "get", "abc"]).is_err());
    }

    #[test]
    fn global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "effect-studio",
            "effects",
            "--base-url",
            "http://other:9000/",
            "--timeout-secs",
            "3",
        ])
        .expect("effects should parse");
        let config = apply_overrides(AppConfig::default(), &cli);
        assert_eq!(config.base_url, "http://other:9000/");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn zero_timeout_flag_is_rejected() {
        let result = Cli::try_parse_from(["effect-studio", "effects", "--timeout-secs", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn incomplete_render_is_rejected_without_contacting_backend() {
        let config = AppConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            timeout_secs: 1,
            ..AppConfig::default()
        };
        let service = build_application_service(&config).expect("service");
        let mut session = PipelineSession::new();
        let command = Command::Render {
            id: 4,
            effects: vec!["sobel".to_string()],
            output_dir: None,
        };

        let result = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(run_command(command, &service, &mut session, &config));

        match result {
            Err(CommandError::Runtime(msg)) => assert!(msg.starts_with("pipeline incomplete")),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(session.selected_image().is_none());
    }

    #[test]
    fn effect_arguments_configure_parameters() {
        let effect = parse_effect_arg("gaussianBlur:BT=REFLECT, size=5,sigma=2")
            .expect("effect argument should parse");
        assert_eq!(effect.effect_type(), Some(EffectType::GaussianBlur));

        let mut session = PipelineSession::new();
        session.pipeline_mut().push(effect);
        let query = session.pipeline().to_query().expect("complete");
        assert_eq!(
            query.pairs(),
            vec![
                ("algorithm", "gaussianBlur"),
                ("BT", "REFLECT"),
                ("size", "5"),
                ("sigma", "2"),
            ]
        );
    }

    #[test]
    fn effect_argument_without_values_keeps_defaults() {
        let effect = parse_effect_arg("vortex").expect("effect argument should parse");
        assert_eq!(effect.params().len(), 3);
        assert!(parse_effect_arg("sharpen").is_err());
        assert!(parse_effect_arg("sobel:color").is_err());
        assert!(parse_effect_arg("sobel:color=Blue").is_err());
    }

    #[test]
    fn list_query_combinations() {
        assert_eq!(list_query(None, None, None, None).ok(), Some(ImageListQuery::All));
        assert_eq!(
            list_query(Some(2), Some(10), None, None).ok(),
            Some(ImageListQuery::Page { index: 2, size: 10 })
        );
        assert_eq!(
            list_query(None, None, Some("png".to_string()), Some("cat".to_string())).ok(),
            Some(ImageListQuery::Filtered {
                image_type: "png".to_string(),
                name: "cat".to_string(),
            })
        );
        assert!(matches!(
            list_query(Some(1), Some(5), Some("png".to_string()), None),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn incomplete_pipeline_gets_a_readable_message() {
        let error = CommandError::from(ApplicationError::Domain(DomainError::IncompletePipeline));
        assert!(matches!(error, CommandError::Runtime(msg) if msg.contains("incomplete")));
    }
}
