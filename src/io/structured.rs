//! Structured (YAML) writer.
//!
//! ```text
//! levels: 2
//! degree: 2
//! data:
//!     - level: 0
//!       spheres: [
//!         {center: [0, 0, 0], radius: 1},
//!         ...
//!       ]
//! ```
//!
//! Write-only. Spheres are flow-style mappings so stock YAML loaders (the
//! downstream converters parse this with PyYAML) see plain lists of dicts.
//! Occupancy is never written in this format.

use std::io::{self, Write};

use crate::tree::{layout, SphereTree};

const TAB: &str = "    ";

/// Write the whole tree in structured format, lengths multiplied by `scale`.
pub(crate) fn write<W: Write>(tree: &SphereTree, w: &mut W, scale: f32) -> io::Result<()> {
  writeln!(w, "levels: {}", tree.levels())?;
  writeln!(w, "degree: {}", tree.degree())?;
  writeln!(w, "data:")?;

  let mut index = 0;
  for level in 0..tree.levels() {
    writeln!(w, "{TAB}- level: {level}")?;
    writeln!(w, "{TAB}  spheres: [")?;

    let count = layout::row_count(tree.degree(), level);
    for j in 0..count {
      let s = tree.node(index);
      index += 1;

      write!(
        w,
        "{TAB}{TAB}{{center: [{}, {}, {}], radius: {}",
        s.center.x * scale,
        s.center.y * scale,
        s.center.z * scale,
        s.radius * scale
      )?;
      if let Some(aux) = &s.aux {
        write!(
          w,
          ", aux: {{center: [{}, {}, {}], radius: {}, errDec: {}}}",
          aux.center.x * scale,
          aux.center.y * scale,
          aux.center.z * scale,
          aux.radius * scale,
          aux.err_dec
        )?;
      }
      write!(w, "}}")?;

      if j != count - 1 {
        write!(w, ",")?;
      }
      writeln!(w)?;
    }
    writeln!(w, "{TAB}  ]")?;
  }
  Ok(())
}

#[cfg(test)]
#[path = "structured_test.rs"]
mod structured_test;
