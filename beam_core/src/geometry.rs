//! # Beam Mesh Generation
//!
//! Builds triangle-list buffers for a 3D view of the beam: a rectangular
//! cross-section extruded along the span, displaced vertically by the scaled
//! deflection curve, with a per-vertex color ramp from blue (no deflection)
//! toward yellow (maximum deflection).
//!
//! The buffers use the common GPU layout: flat `f32` position and color
//! arrays (3 components per vertex) plus a `u32` triangle index list, so
//! they can be serialized and handed to any renderer.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::geometry::{deformed_mesh, undeformed_mesh};
//!
//! let mesh = deformed_mesh(20.0, 5000.0, 5.0).unwrap();
//! assert_eq!(mesh.vertex_count(), 404);
//!
//! // The undeformed outline is fixed and built once
//! let outline = undeformed_mesh();
//! assert_eq!(outline.indices.len(), mesh.indices.len());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::sampling::{extremum_of, generate_beam_data};
use crate::equations::beam::SPAN_M;
use crate::errors::{BeamError, BeamResult};

/// Number of segments along the span (one cross-section per boundary)
pub const SEGMENTS: usize = 100;

/// Default deformation exaggeration factor for display.
/// Typical range 0.1 to 10.
pub const DEFAULT_DEFORMATION_SCALE: f64 = 5.0;

/// Cross-section width (m), along the z axis
pub const BEAM_WIDTH_M: f64 = 0.4;

/// Cross-section height (m), along the y axis
pub const BEAM_HEIGHT_M: f64 = 0.6;

/// Triangle-list mesh buffers.
///
/// Vertices are grouped four per cross-section, ordered bottom-front,
/// top-front, top-back, bottom-back. The beam is centered on the origin,
/// spanning x in [-5, 5].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamMesh {
    /// Vertex positions, 3 floats per vertex (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex colors, 3 floats per vertex (r, g, b); empty for the outline
    pub colors: Vec<f32>,
    /// Triangle indices into the vertex list
    pub indices: Vec<u32>,
}

impl BeamMesh {
    /// Number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

fn push_cross_section(positions: &mut Vec<f32>, x: f64, y: f64) {
    let half_h = BEAM_HEIGHT_M / 2.0;
    let half_w = BEAM_WIDTH_M / 2.0;

    // Four corners of the cross-section at this station
    positions.push(x as f32);
    positions.push((y - half_h) as f32);
    positions.push((-half_w) as f32);

    positions.push(x as f32);
    positions.push((y + half_h) as f32);
    positions.push((-half_w) as f32);

    positions.push(x as f32);
    positions.push((y + half_h) as f32);
    positions.push(half_w as f32);

    positions.push(x as f32);
    positions.push((y - half_h) as f32);
    positions.push(half_w as f32);
}

/// Triangle indices joining consecutive cross-sections.
///
/// The index buffer only depends on the segment count, so the deformed mesh
/// and the undeformed outline share the same layout.
fn box_indices() -> Vec<u32> {
    let mut indices = Vec::with_capacity(SEGMENTS * 24);

    for i in 0..SEGMENTS {
        let base = (i * 4) as u32;
        let next = ((i + 1) * 4) as u32;

        // Front face
        indices.extend_from_slice(&[base, base + 1, next + 1]);
        indices.extend_from_slice(&[base, next + 1, next]);

        // Back face
        indices.extend_from_slice(&[base + 2, base + 3, next + 3]);
        indices.extend_from_slice(&[base + 2, next + 3, next + 2]);

        // Top face
        indices.extend_from_slice(&[base + 1, base + 2, next + 2]);
        indices.extend_from_slice(&[base + 1, next + 2, next + 1]);

        // Bottom face
        indices.extend_from_slice(&[base + 3, base, next]);
        indices.extend_from_slice(&[base + 3, next, next + 3]);
    }

    indices
}

/// Build the deformed beam mesh.
///
/// Each cross-section is displaced by `deflection * scale`. Colors encode
/// the deflection ratio at the station, normalized by the largest scaled
/// deflection over this mesh's own sampling grid:
///
/// - r = ratio · 0.9
/// - g = 0.5 + ratio · 0.3
/// - b = 1 − ratio · 0.5
///
/// A zero-load beam has a zero normalizer; the denominator falls back to 1
/// so every station gets the base color (0, 0.5, 1).
///
/// # Arguments
///
/// * `w0` - Load intensity parameter (kN/m)
/// * `ei` - Flexural rigidity EI (kN·m²)
/// * `scale` - Deformation exaggeration factor for display
pub fn deformed_mesh(w0: f64, ei: f64, scale: f64) -> BeamResult<BeamMesh> {
    if !scale.is_finite() {
        return Err(BeamError::invalid_input(
            "deformation_scale",
            scale.to_string(),
            "Deformation scale must be finite",
        ));
    }
    if scale < 0.0 {
        return Err(BeamError::invalid_input(
            "deformation_scale",
            scale.to_string(),
            "Deformation scale cannot be negative",
        ));
    }

    let samples = generate_beam_data(w0, ei, SEGMENTS)?;
    let max_def = extremum_of(&samples).max_deflection_m.abs();

    let mut positions = Vec::with_capacity((SEGMENTS + 1) * 12);
    let mut colors = Vec::with_capacity((SEGMENTS + 1) * 12);

    for sample in &samples {
        let x = sample.x_m - SPAN_M / 2.0;
        let y = sample.deflection_m * scale;

        let denominator = max_def * scale;
        let denominator = if denominator == 0.0 { 1.0 } else { denominator };
        let ratio = y.abs() / denominator;

        let r = ratio * 0.9;
        let g = 0.5 + ratio * 0.3;
        let b = 1.0 - ratio * 0.5;

        push_cross_section(&mut positions, x, y);
        for _ in 0..4 {
            colors.push(r as f32);
            colors.push(g as f32);
            colors.push(b as f32);
        }
    }

    Ok(BeamMesh {
        positions,
        colors,
        indices: box_indices(),
    })
}

static UNDEFORMED_MESH: Lazy<BeamMesh> = Lazy::new(|| {
    let mut positions = Vec::with_capacity((SEGMENTS + 1) * 12);

    for i in 0..=SEGMENTS {
        let x = i as f64 / SEGMENTS as f64 * SPAN_M - SPAN_M / 2.0;
        push_cross_section(&mut positions, x, 0.0);
    }

    BeamMesh {
        positions,
        colors: Vec::new(),
        indices: box_indices(),
    }
});

/// The undeformed beam outline (y = 0 everywhere, no vertex colors).
///
/// The outline does not depend on any input, so it is built once and shared.
pub fn undeformed_mesh() -> &'static BeamMesh {
    &UNDEFORMED_MESH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_buffer_sizes() {
        let mesh = deformed_mesh(20.0, 5000.0, 5.0).unwrap();

        // 101 cross-sections of 4 vertices, 3 floats each
        assert_eq!(mesh.positions.len(), 1212);
        assert_eq!(mesh.colors.len(), 1212);
        // 100 segments, 4 faces, 2 triangles, 3 indices
        assert_eq!(mesh.indices.len(), 2400);

        assert_eq!(mesh.vertex_count(), 404);
        assert_eq!(mesh.triangle_count(), 800);
    }

    #[test]
    fn test_mesh_centered_on_origin() {
        let mesh = deformed_mesh(20.0, 5000.0, 5.0).unwrap();

        // First station at x = -5, last at x = +5
        assert_eq!(mesh.positions[0], -5.0);
        assert_eq!(mesh.positions[100 * 12], 5.0);
    }

    #[test]
    fn test_cross_section_corner_layout() {
        let mesh = deformed_mesh(0.0, 5000.0, 5.0).unwrap();

        // Zero load: first cross-section sits at y = 0, corners at ±height/2
        // and ±width/2 in the documented order
        let v = &mesh.positions[0..12];
        assert_eq!(&v[0..3], &[-5.0, -0.3, -0.2]);
        assert_eq!(&v[3..6], &[-5.0, 0.3, -0.2]);
        assert_eq!(&v[6..9], &[-5.0, 0.3, 0.2]);
        assert_eq!(&v[9..12], &[-5.0, -0.3, 0.2]);
    }

    #[test]
    fn test_color_at_extremum_station() {
        // On the 101-station grid the largest deflection for the default
        // inputs is at station 58 (x = 5.8 m), so its ratio is exactly 1
        let mesh = deformed_mesh(20.0, 5000.0, 5.0).unwrap();

        let r = mesh.colors[58 * 12];
        let g = mesh.colors[58 * 12 + 1];
        let b = mesh.colors[58 * 12 + 2];
        assert!((r - 0.9).abs() < 1e-6, "r = {}", r);
        assert!((g - 0.8).abs() < 1e-6, "g = {}", g);
        assert!((b - 0.5).abs() < 1e-6, "b = {}", b);
    }

    #[test]
    fn test_zero_load_uniform_base_color() {
        // No deflection anywhere: the normalizer falls back to 1 and every
        // station keeps the base color
        let mesh = deformed_mesh(0.0, 5000.0, 5.0).unwrap();

        for vertex in 0..mesh.vertex_count() {
            let r = mesh.colors[vertex * 3];
            let g = mesh.colors[vertex * 3 + 1];
            let b = mesh.colors[vertex * 3 + 2];
            assert_eq!((r, g, b), (0.0, 0.5, 1.0), "vertex {}", vertex);
        }
    }

    #[test]
    fn test_deformed_vertices_displaced() {
        let mesh = deformed_mesh(20.0, 5000.0, 5.0).unwrap();

        // Midspan bottom-front corner: y = deflection * scale - height/2
        let y = mesh.positions[50 * 12 + 1];
        let expected = (0.5941 * 5.0 - 0.3) as f32;
        assert!((y - expected).abs() < 1e-4, "y = {} (expected {})", y, expected);
    }

    #[test]
    fn test_displacement_proportional_to_scale() {
        let mesh_1x = deformed_mesh(20.0, 5000.0, 1.0).unwrap();
        let mesh_2x = deformed_mesh(20.0, 5000.0, 2.0).unwrap();

        // Doubling the scale doubles the displacement above the corner offset
        for station in [10usize, 50, 58, 90] {
            let y_1x = mesh_1x.positions[station * 12 + 1] as f64 + BEAM_HEIGHT_M / 2.0;
            let y_2x = mesh_2x.positions[station * 12 + 1] as f64 + BEAM_HEIGHT_M / 2.0;
            assert!(
                (y_2x - 2.0 * y_1x).abs() < 1e-5,
                "station {}: {} vs {}",
                station,
                y_2x,
                y_1x
            );
        }

        // The color ramp is scale-invariant
        for k in 0..mesh_1x.colors.len() {
            assert!((mesh_1x.colors[k] - mesh_2x.colors[k]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_undeformed_outline() {
        let outline = undeformed_mesh();

        assert_eq!(outline.positions.len(), 1212);
        assert!(outline.colors.is_empty());
        assert_eq!(outline.indices.len(), 2400);

        // Flat: every station's corners sit at ±height/2
        assert_eq!(outline.positions[1], -0.3);
        assert_eq!(outline.positions[50 * 12 + 1], -0.3);

        // Built once and shared
        assert!(std::ptr::eq(outline, undeformed_mesh()));
    }

    #[test]
    fn test_scale_validation() {
        assert!(deformed_mesh(20.0, 5000.0, f64::NAN).is_err());
        assert!(deformed_mesh(20.0, 5000.0, -1.0).is_err());
        // Zero scale is allowed: a flat beam with base colors
        assert!(deformed_mesh(20.0, 5000.0, 0.0).is_ok());
    }

    #[test]
    fn test_mesh_serialization() {
        let mesh = deformed_mesh(20.0, 5000.0, 5.0).unwrap();
        let json = serde_json::to_string(&mesh).unwrap();
        let roundtrip: BeamMesh = serde_json::from_str(&json).unwrap();
        assert_eq!(mesh, roundtrip);
    }
}
