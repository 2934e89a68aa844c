//! Legacy SPH text codec.
//!
//! ```text
//! levels degree
//! cx cy cz r occupancy [auxcx auxcy auxcz auxr errDec]
//! ...                       (one line per node, breadth-first)
//! ```
//!
//! The writer emits 5 columns per node, or 10 when an auxiliary sphere is
//! present. The reader additionally accepts the historical 4- and 9-column
//! shapes (no occupancy column), so files written by older tools still load.
//! Occupancy round-trips only through the 5-column shape; the aux shapes
//! always leave it at the unset sentinel.

use std::io::{self, BufRead, Write};

use glam::Vec3;

use crate::error::{IoError, IoResult};
use crate::sphere::{AuxSphere, Sphere, UNSET_OCCUPANCY};
use crate::tree::SphereTree;

/// One parsed node line, tagged by shape instead of sniffing field counts at
/// the use site.
#[derive(Debug, PartialEq)]
pub(crate) enum NodeLine {
  /// 4 or 5 columns: primary sphere, occupancy present only in the 5-column
  /// shape.
  Primary {
    center: Vec3,
    radius: f32,
    occupancy: Option<f32>,
  },
  /// 9 or 10 columns: primary plus auxiliary sphere. The 10-column shape
  /// carries an occupancy column which is deliberately not restored.
  PrimaryWithAux {
    center: Vec3,
    radius: f32,
    aux: AuxSphere,
  },
}

/// Parse a node line into its tagged shape. Returns `None` for any other
/// column count or a non-numeric token.
pub(crate) fn parse_node_line(line: &str) -> Option<NodeLine> {
  let mut vals = [0f32; 10];
  let mut n = 0;
  for tok in line.split_whitespace() {
    if n == vals.len() {
      return None;
    }
    vals[n] = tok.parse().ok()?;
    n += 1;
  }

  let center = Vec3::new(vals[0], vals[1], vals[2]);
  let radius = vals[3];
  match n {
    4 => Some(NodeLine::Primary {
      center,
      radius,
      occupancy: None,
    }),
    5 => Some(NodeLine::Primary {
      center,
      radius,
      occupancy: Some(vals[4]),
    }),
    9 => Some(NodeLine::PrimaryWithAux {
      center,
      radius,
      aux: AuxSphere {
        center: Vec3::new(vals[4], vals[5], vals[6]),
        radius: vals[7],
        err_dec: vals[8],
      },
    }),
    // Writer output: column 4 is occupancy, skipped on the way back in.
    10 => Some(NodeLine::PrimaryWithAux {
      center,
      radius,
      aux: AuxSphere {
        center: Vec3::new(vals[5], vals[6], vals[7]),
        radius: vals[8],
        err_dec: vals[9],
      },
    }),
    _ => None,
  }
}

impl NodeLine {
  /// Materialize the parsed line as a stored sphere, scaling lengths.
  fn into_sphere(self, scale: f32) -> Sphere {
    match self {
      NodeLine::Primary {
        center,
        radius,
        occupancy,
      } => Sphere {
        center: center * scale,
        radius: radius * scale,
        occupancy: occupancy.unwrap_or(UNSET_OCCUPANCY),
        aux: None,
      },
      NodeLine::PrimaryWithAux {
        center,
        radius,
        aux,
      } => Sphere {
        center: center * scale,
        radius: radius * scale,
        occupancy: UNSET_OCCUPANCY,
        aux: Some(AuxSphere {
          center: aux.center * scale,
          radius: aux.radius * scale,
          err_dec: aux.err_dec,
        }),
      },
    }
  }
}

/// Write the whole tree in legacy format, lengths multiplied by `scale`.
pub(crate) fn write<W: Write>(tree: &SphereTree, w: &mut W, scale: f32) -> io::Result<()> {
  writeln!(w, "{} {}", tree.levels(), tree.degree())?;
  for s in tree.nodes() {
    write!(
      w,
      "{} {} {} {} {}",
      s.center.x * scale,
      s.center.y * scale,
      s.center.z * scale,
      s.radius * scale,
      s.occupancy
    )?;
    if let Some(aux) = &s.aux {
      write!(
        w,
        " {} {} {} {} {}",
        aux.center.x * scale,
        aux.center.y * scale,
        aux.center.z * scale,
        aux.radius * scale,
        aux.err_dec
      )?;
    }
    writeln!(w)?;
  }
  Ok(())
}

/// Replace `tree` with the legacy-format content of `reader`.
///
/// Sizing proceeds level by level, one row append per level, independently of
/// the closed-form total (the two derivations agree; see the layout tests).
/// A bad header clears the tree; a malformed or missing node line truncates
/// it to the levels read completely, so `levels` always matches the populated
/// node count.
pub(crate) fn read_into<R: BufRead>(
  tree: &mut SphereTree,
  reader: R,
  scale: f32,
) -> IoResult<()> {
  let mut lines = reader.lines();
  let mut line_no = 0usize;

  let header = match next_non_blank(&mut lines, &mut line_no)? {
    Some((_, line)) => line,
    None => {
      tree.clear();
      return Err(IoError::Header);
    }
  };
  let mut toks = header.split_whitespace();
  let parsed = (
    toks.next().and_then(|t| t.parse::<usize>().ok()),
    toks.next().and_then(|t| t.parse::<usize>().ok()),
    toks.next(),
  );
  let (levels, degree) = match parsed {
    (Some(levels), Some(degree), None) if levels >= 1 && degree >= 1 => (levels, degree),
    _ => {
      tree.clear();
      return Err(IoError::Header);
    }
  };

  tree.reset_for_load(degree, levels);

  let mut row = 1usize;
  for level in 0..levels {
    let base = tree.append_row(row);

    for i in 0..row {
      let (no, line) = match next_non_blank(&mut lines, &mut line_no)? {
        Some(entry) => entry,
        None => {
          tree.truncate(base, level);
          return Err(IoError::UnexpectedEof { line: line_no });
        }
      };
      match parse_node_line(&line) {
        Some(node) => *tree.node_mut(base + i) = node.into_sphere(scale),
        None => {
          tree.truncate(base, level);
          return Err(IoError::Node { line: no });
        }
      }
    }

    row *= degree;
  }

  Ok(())
}

/// Next non-blank line from `lines`, advancing the 1-based line counter.
fn next_non_blank<R: BufRead>(
  lines: &mut io::Lines<R>,
  line_no: &mut usize,
) -> io::Result<Option<(usize, String)>> {
  for line in lines.by_ref() {
    let line = line?;
    *line_no += 1;
    if !line.trim().is_empty() {
      return Ok(Some((*line_no, line)));
    }
  }
  Ok(None)
}

#[cfg(test)]
#[path = "legacy_test.rs"]
mod legacy_test;
