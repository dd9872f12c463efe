use adcarousel::view::{CarouselView, SlideLayer};
use adcarousel::{Carousel, CarouselConfig};
use anyhow::Context as _;
use gpui::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("adcarousel=info")),
        )
        .init();

    let config = CarouselConfig::load().context("Failed to load carousel config")?;
    let mut carousel = Carousel::new(SlideLayer::new(config.window.width), &config)
        .context("Failed to build carousel")?;
    carousel.initialize();

    let window_size = size(px(config.window.width), px(config.window.height));
    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, window_size, cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            cx.new(|cx| CarouselView::new(carousel, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open carousel window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
