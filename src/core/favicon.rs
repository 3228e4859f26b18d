use crate::domain::ports::Storage;
use crate::utils::error::{PortfolioError, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use reqwest::Client;
use std::io::Cursor;
use std::sync::Arc;

/// Edge length of the drawing surface in pixels.
pub const ICON_SIZE: u32 = 64;

/// Scales `icon` onto a square surface and clears everything outside the
/// inscribed circle.
pub fn clip_to_circle(icon: &image::DynamicImage, size: u32) -> RgbaImage {
    let mut surface = imageops::resize(&icon.to_rgba8(), size, size, FilterType::Triangle);

    let radius = size as f32 / 2.0;
    for (x, y, pixel) in surface.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        if dx * dx + dy * dy > radius * radius {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
    surface
}

pub fn to_png_data_url(surface: &RgbaImage) -> Result<String> {
    let mut png = Cursor::new(Vec::new());
    surface.write_to(&mut png, ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", B64.encode(png.into_inner())))
}

/// Payload of a `data:` reference, without the scheme. Only base64 payloads
/// carry binary images.
fn decode_data_url(data: &str) -> Result<Vec<u8>> {
    let (meta, payload) = data.split_once(',').ok_or_else(|| PortfolioError::FaviconError {
        message: "data URL has no payload".to_string(),
    })?;
    if !meta.ends_with(";base64") {
        return Err(PortfolioError::FaviconError {
            message: format!("unsupported data URL encoding: {}", meta),
        });
    }
    B64.decode(payload.trim()).map_err(|e| PortfolioError::FaviconError {
        message: format!("invalid base64 payload: {}", e),
    })
}

/// Turns the page icon into a round PNG data URL.
pub struct FaviconRounder<S: Storage> {
    storage: Arc<S>,
    client: Client,
}

impl<S: Storage> FaviconRounder<S> {
    pub fn new(storage: Arc<S>, client: Client) -> Self {
        Self { storage, client }
    }

    /// Returns the replacement reference, or `None` when the original icon
    /// has to stay. Failures are logged only.
    pub async fn round(&self, icon_href: &str) -> Option<String> {
        match self.try_round(icon_href).await {
            Ok(data_url) => {
                tracing::info!("Favicon rounded ({} bytes inline)", data_url.len());
                Some(data_url)
            }
            Err(e) => {
                tracing::warn!("Could not round favicon {}: {}", icon_href, e);
                None
            }
        }
    }

    async fn try_round(&self, icon_href: &str) -> Result<String> {
        let bytes = self.fetch_icon(icon_href).await?;
        let icon = image::load_from_memory(&bytes)?;
        tracing::debug!(
            "Decoded favicon {}x{}",
            icon.width(),
            icon.height()
        );
        to_png_data_url(&clip_to_circle(&icon, ICON_SIZE))
    }

    async fn fetch_icon(&self, icon_href: &str) -> Result<Vec<u8>> {
        if icon_href.is_empty() {
            return Err(PortfolioError::FaviconError {
                message: "page declares no icon".to_string(),
            });
        }
        if let Some(data) = icon_href.strip_prefix("data:") {
            return decode_data_url(data);
        }

        if icon_href.starts_with("http://") || icon_href.starts_with("https://") {
            let response = self.client.get(icon_href).send().await?;
            if !response.status().is_success() {
                return Err(PortfolioError::FaviconError {
                    message: format!("icon request returned {}", response.status()),
                });
            }
            Ok(response.bytes().await?.to_vec())
        } else {
            self.storage.read_file(icon_href.trim_start_matches('/')).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use image::DynamicImage;
    use tempfile::TempDir;

    fn red_square(size: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba([255, 0, 0, 255])))
    }

    fn decode_png_data_url(url: &str) -> RgbaImage {
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = B64.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap().to_rgba8()
    }

    #[test]
    fn test_clip_to_circle() {
        let surface = clip_to_circle(&red_square(16), ICON_SIZE);

        assert_eq!(surface.dimensions(), (ICON_SIZE, ICON_SIZE));
        assert_eq!(surface.get_pixel(0, 0)[3], 0);
        assert_eq!(surface.get_pixel(63, 63)[3], 0);
        assert_eq!(surface.get_pixel(63, 0)[3], 0);
        assert_eq!(surface.get_pixel(32, 32), &Rgba([255, 0, 0, 255]));
        // edge midpoints lie inside the circle
        assert_eq!(surface.get_pixel(32, 0)[3], 255);
        assert_eq!(surface.get_pixel(0, 32)[3], 255);
    }

    #[tokio::test]
    async fn test_round_local_icon() {
        let temp_dir = TempDir::new().unwrap();
        red_square(32)
            .save_with_format(temp_dir.path().join("favicon.png"), ImageFormat::Png)
            .unwrap();

        let rounder = FaviconRounder::new(Arc::new(LocalStorage::new(temp_dir.path())), Client::new());
        let data_url = rounder.round("favicon.png").await.unwrap();

        let surface = decode_png_data_url(&data_url);
        assert_eq!(surface.dimensions(), (64, 64));
        assert_eq!(surface.get_pixel(0, 0)[3], 0);
        assert_eq!(surface.get_pixel(32, 32)[3], 255);
    }

    #[tokio::test]
    async fn test_missing_icon_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let rounder = FaviconRounder::new(Arc::new(LocalStorage::new(temp_dir.path())), Client::new());

        assert_eq!(rounder.round("missing.png").await, None);
        assert_eq!(rounder.round("").await, None);
    }

    #[tokio::test]
    async fn test_undecodable_icon_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("favicon.png"), b"not an image").unwrap();
        let rounder = FaviconRounder::new(Arc::new(LocalStorage::new(temp_dir.path())), Client::new());

        assert_eq!(rounder.round("favicon.png").await, None);
    }

    #[tokio::test]
    async fn test_inline_data_icon_is_rounded() {
        let mut png = Cursor::new(Vec::new());
        red_square(32).write_to(&mut png, ImageFormat::Png).unwrap();
        let href = format!("data:image/png;base64,{}", B64.encode(png.into_inner()));

        let temp_dir = TempDir::new().unwrap();
        let rounder = FaviconRounder::new(Arc::new(LocalStorage::new(temp_dir.path())), Client::new());
        let data_url = rounder.round(&href).await.unwrap();

        let surface = decode_png_data_url(&data_url);
        assert_eq!(surface.dimensions(), (64, 64));
        assert_eq!(surface.get_pixel(0, 0)[3], 0);
        assert_eq!(surface.get_pixel(32, 32), &Rgba([255, 0, 0, 255]));
    }

    #[tokio::test]
    async fn test_jpeg_icon_is_rounded() {
        let temp_dir = TempDir::new().unwrap();
        DynamicImage::ImageRgb8(red_square(24).to_rgb8())
            .save_with_format(temp_dir.path().join("favicon.jpg"), ImageFormat::Jpeg)
            .unwrap();

        let rounder = FaviconRounder::new(Arc::new(LocalStorage::new(temp_dir.path())), Client::new());
        let data_url = rounder.round("favicon.jpg").await.unwrap();

        let surface = decode_png_data_url(&data_url);
        assert_eq!(surface.get_pixel(0, 0)[3], 0);
        assert_eq!(surface.get_pixel(32, 32)[3], 255);
    }

    #[tokio::test]
    async fn test_non_base64_data_icon_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let rounder = FaviconRounder::new(Arc::new(LocalStorage::new(temp_dir.path())), Client::new());

        assert_eq!(rounder.round("data:image/svg+xml,<svg></svg>").await, None);
        assert_eq!(rounder.round("data:image/png;base64,!!!").await, None);
    }

    #[tokio::test]
    async fn test_remote_icon() {
        let mut png = Cursor::new(Vec::new());
        red_square(48).write_to(&mut png, ImageFormat::Png).unwrap();

        let server = httpmock::MockServer::start();
        let icon_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/icon.png");
            then.status(200)
                .header("Content-Type", "image/png")
                .body(png.into_inner());
        });

        let temp_dir = TempDir::new().unwrap();
        let rounder = FaviconRounder::new(Arc::new(LocalStorage::new(temp_dir.path())), Client::new());
        let data_url = rounder.round(&server.url("/icon.png")).await.unwrap();

        icon_mock.assert();
        assert!(data_url.starts_with("data:image/png;base64,"));
    }
}
