//! Pointer-to-plant resolution and tooltip effects.

use thiserror::Error;

use crate::entity::{Entity, Point};

/// Receives tooltip effects from the hover layer. Coordinates are world
/// pixels near the pointer.
pub trait TooltipSink {
    fn show(&mut self, text: &str, x: f64, y: f64);
    fn hide(&mut self);
}

/// Resolve the pointer to an entity within `radius` world pixels.
///
/// Every entity is scanned without early exit; when several fall inside
/// the radius the last one in iteration order wins. Callers rely on this
/// last-wins tie-break, so do not "optimize" the scan into a first-match
/// or nearest-match search.
pub fn hit_test(entities: &[Entity], pointer_x: f64, pointer_y: f64, radius: f64) -> Option<&Entity> {
    let pointer = Point::new(pointer_x, pointer_y);
    let mut hit = None;
    for entity in entities {
        if entity.position.distance(pointer) < radius {
            hit = Some(entity);
        }
    }
    hit
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OriginError {
    #[error("origin {0:?} has no scheme separator")]
    MissingScheme(String),
    #[error("origin {0:?} has an empty host")]
    EmptyHost(String),
}

/// Extract the hostname from `scheme://[user@]host[:port]/...`.
///
/// The garden only ever displays the host, so this stays deliberately
/// small; anything that does not look like an absolute URL is a
/// recoverable [`OriginError`], never a silent blank.
pub fn origin_host(url: &str) -> Result<String, OriginError> {
    let (_, rest) = url
        .split_once("://")
        .ok_or_else(|| OriginError::MissingScheme(url.to_string()))?;
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let authority = match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    };
    let host = match authority.split_once(':') {
        Some((host, _port)) => host,
        None => authority,
    };
    if host.is_empty() {
        return Err(OriginError::EmptyHost(url.to_string()));
    }
    Ok(host.to_string())
}

/// Tooltip body for a hovered entity: label plus parsed origin.
///
/// An unparsable origin is logged and replaced with a placeholder; a
/// failure here must never unwind through the frame cycle.
pub fn tooltip_text(entity: &Entity) -> String {
    let label = if entity.label.is_empty() {
        "(untitled)"
    } else {
        entity.label.as_str()
    };
    let host = match origin_host(&entity.origin_url) {
        Ok(host) => host,
        Err(err) => {
            tracing::warn!(tab = entity.id, %err, "tooltip origin fallback");
            "unknown origin".to_string()
        }
    };
    format!("{label} ({host})")
}
