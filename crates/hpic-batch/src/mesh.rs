// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — PUMI Mesh Block
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Trailing mesh block of the hPIC command line.
//!
//! Grammar: `N "type_1" "p1_1" "Nel_1" "p2min_1" ... "type_N" ...`. The
//! submesh count is bare; every per-submesh field is double-quoted and the
//! fields are separated by exactly one space. hPIC's PUMI argument parser
//! splits on this shape, so it is reproduced byte-for-byte.

use crate::cmdline::Token;
use hpic_types::config::{MeshConfig, Submesh};

/// The four quoted fields of one submesh.
pub fn submesh_tokens(submesh: &Submesh) -> [Token; 4] {
    [
        Token::Quoted(submesh.kind.tag().to_string()),
        Token::Quoted(submesh.debye_lengths.to_string()),
        Token::Quoted(submesh.elements.to_string()),
        Token::Quoted(submesh.min_cells_per_debye_length.to_string()),
    ]
}

/// Submesh count followed by every submesh's fields.
pub fn mesh_tokens(mesh: &MeshConfig) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(1 + 4 * mesh.submeshes.len());
    tokens.push(Token::Bare(mesh.submeshes.len().to_string()));
    for submesh in &mesh.submeshes {
        tokens.extend(submesh_tokens(submesh));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmdline::render_tokens;
    use hpic_types::config::MeshKind;

    #[test]
    fn test_default_mesh_block_bytes() {
        let block = render_tokens(&mesh_tokens(&MeshConfig::default()));
        assert_eq!(block, r#"1 "uniform" "50" "60" "0""#);
    }

    #[test]
    fn test_two_submesh_block_bytes() {
        let mesh = MeshConfig {
            submeshes: vec![
                Submesh {
                    kind: MeshKind::LeftBoundaryLayer,
                    debye_lengths: 10,
                    elements: 20,
                    min_cells_per_debye_length: 4,
                },
                Submesh::default(),
            ],
        };
        let block = render_tokens(&mesh_tokens(&mesh));
        assert_eq!(
            block,
            r#"2 "leftBL" "10" "20" "4" "uniform" "50" "60" "0""#
        );
    }

    #[test]
    fn test_token_count_per_submesh() {
        let mesh = MeshConfig {
            submeshes: vec![Submesh::default(); 3],
        };
        assert_eq!(mesh_tokens(&mesh).len(), 1 + 4 * 3);
    }
}
