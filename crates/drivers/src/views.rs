//! Text renditions of the home, gallery and image views.

use effect_studio_adapters::{present_decoded, present_listing};
use effect_studio_application::{
    ApplicationError, ApplicationService, FetchImageCommand, ImageListQuery, ListImagesCommand,
    OpenImageCommand, PipelineSession,
};
use effect_studio_domain::{catalog, ImageId, Route};

pub async fn render(
    route: Route,
    service: &ApplicationService,
    session: &mut PipelineSession,
) -> Result<Vec<String>, ApplicationError> {
    match route {
        Route::Home => Ok(home()),
        Route::Gallery => {
            session.clear_selection();
            let listing = service
                .list_images(ListImagesCommand {
                    query: ImageListQuery::All,
                })
                .await?;
            Ok(present_listing(&listing))
        }
        Route::Image { id } => image(id, service, session).await,
    }
}

fn home() -> Vec<String> {
    let effects = catalog::all();
    let mut lines = vec![format!("{} effects available", effects.len())];
    lines.extend(
        effects
            .iter()
            .map(|schema| format!("  {}\t{}", schema.effect_type, schema.label)),
    );
    lines
}

async fn image(
    id: i64,
    service: &ApplicationService,
    session: &mut PipelineSession,
) -> Result<Vec<String>, ApplicationError> {
    // 0 is what malformed ids resolve to.
    if id <= 0 {
        return Err(ApplicationError::NotFound(format!("image not found for id={id}")));
    }
    let image_id = ImageId::new(id)?;

    let selected = service
        .open_image(session, OpenImageCommand { image_id })
        .await?;
    let blob = service.fetch_image(FetchImageCommand { image_id }).await?;
    let decoded = service.describe_image(&blob)?;

    Ok(vec![
        format!("{}\t{}\t{}", selected.name, selected.image_type, selected.size),
        selected.url.clone(),
        present_decoded(&selected.name, &decoded),
    ])
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use effect_studio_adapters::{HttpImageGateway, ImageCrateDecoder};

    use super::*;

    fn offline_service() -> ApplicationService {
        let gateway = HttpImageGateway::new("http://127.0.0.1:9/", Duration::from_millis(200))
            .expect("gateway");
        ApplicationService::new(
            Box::new(gateway),
            Box::new(ImageCrateDecoder),
            "http://127.0.0.1:9/",
        )
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    #[test]
    fn home_lists_catalog() {
        let service = offline_service();
        let mut session = PipelineSession::new();
        let lines = block_on(render(Route::Home, &service, &mut session)).expect("home");
        assert_eq!(lines[0], "18 effects available");
        assert_eq!(lines[1], "  filter\tTeinte");
        assert_eq!(lines.len(), 19);
    }

    #[test]
    fn malformed_image_route_is_not_found() {
        let service = offline_service();
        let mut session = PipelineSession::new();
        let route = Route::resolve("/image/abc").expect("image route");

        let result = block_on(render(route, &service, &mut session));
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
        assert!(session.selected_image().is_none());
    }
}
