use super::*;

/// total_nodes matches the geometric series for a grid of (degree, levels).
#[test]
fn test_total_nodes_closed_form() {
  assert_eq!(total_nodes(2, 1), 1);
  assert_eq!(total_nodes(2, 3), 7);
  assert_eq!(total_nodes(3, 3), 13);
  assert_eq!(total_nodes(8, 2), 9);
  assert_eq!(total_nodes(1, 5), 5);
}

/// total_nodes agrees with the per-level multiply-walk sizing used by the
/// legacy loader, for every (degree, levels) in a broad grid. The two
/// derivations are independent and must never diverge.
#[test]
fn test_total_nodes_agrees_with_level_walk() {
  for degree in 1..=8 {
    for levels in 1..=6 {
      let mut walked = 0;
      let mut row = 1;
      for _ in 0..levels {
        walked += row;
        row *= degree;
      }
      assert_eq!(
        total_nodes(degree, levels),
        walked,
        "sizing derivations diverge for degree={} levels={}",
        degree,
        levels
      );
    }
  }
}

/// Row start/count partition the node sequence exactly.
#[test]
fn test_rows_partition_sequence() {
  for degree in 1..=4 {
    for levels in 1..=5 {
      let mut expected_start = 0;
      for level in 0..levels {
        let (start, count) = get_row(degree, level);
        assert_eq!(start, expected_start);
        assert_eq!(count, row_count(degree, level));
        expected_start += count;
      }
      assert_eq!(expected_start, total_nodes(degree, levels));
    }
  }
}

/// Children of node i at level l are {i*D+1..=i*D+D}, all inside level l+1.
#[test]
fn test_children_lie_in_next_row() {
  for degree in 1..=4usize {
    let levels = 4;
    for level in 0..levels - 1 {
      let (start, count) = get_row(degree, level);
      let (next_start, next_count) = get_row(degree, level + 1);
      for i in start..start + count {
        let kids = children(degree, i);
        assert_eq!(kids.clone().count(), degree);
        for c in kids {
          assert!(
            c >= next_start && c < next_start + next_count,
            "child {} of node {} outside level {}",
            c,
            i,
            level + 1
          );
        }
      }
    }
  }
}

/// level_of inverts the row layout for in-range indices.
#[test]
fn test_level_of_inverts_rows() {
  for degree in 1..=4 {
    let levels = 4;
    for level in 0..levels {
      let (start, count) = get_row(degree, level);
      for i in start..start + count {
        assert_eq!(level_of(degree, levels, i), level);
      }
    }
  }
}

/// Past the probed boundaries level_of reports levels + 1, the historical
/// out-of-range answer.
#[test]
fn test_level_of_out_of_range() {
  let degree = 2;
  let levels = 3;
  // Boundary walk probes levels 0..=3, covering 15 indices.
  assert_eq!(level_of(degree, levels, 15), levels + 1);
}

/// setup_tree(2, 3) scenario: node 0 is the root, nodes 1 and 2 form level 1,
/// nodes 3,4 are children of 1 and 5,6 children of 2 on level 2.
#[test]
fn test_binary_three_level_scenario() {
  assert_eq!(get_row(2, 0), (0, 1));
  assert_eq!(get_row(2, 1), (1, 2));
  assert_eq!(get_row(2, 2), (3, 4));
  assert_eq!(children(2, 0), 1..=2);
  assert_eq!(children(2, 1), 3..=4);
  assert_eq!(children(2, 2), 5..=6);
}
