//! Score tracking: one point per pipe group the bird has passed

use super::pipes::PipeGroup;
use super::rect::Rect;

/// Mark every newly passed group as scored; returns how many were marked.
///
/// A group is passed once the center of its reference pipe (bottom if
/// present, else top) is left of the bird's center.
pub fn score_passed_pipes(bird: &Rect, groups: &mut [PipeGroup]) -> u32 {
    let bird_center = bird.center_x();
    let mut points = 0;
    for group in groups.iter_mut().filter(|g| !g.scored) {
        if group.reference_rect().center_x() < bird_center {
            group.scored = true;
            points += 1;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pipes::PipeLayout;

    fn bird() -> Rect {
        Rect::new(BIRD_X, BIRD_SPAWN_Y, BIRD_WIDTH, BIRD_HEIGHT)
    }

    #[test]
    fn test_scores_once() {
        // Pipe center 40 + 26 = 66 < bird center 67
        let mut groups = vec![PipeGroup::with_layout(PipeLayout::Both, 40.0, 200.0, 150.0)];
        assert_eq!(score_passed_pipes(&bird(), &mut groups), 1);
        assert!(groups[0].scored);
        assert_eq!(score_passed_pipes(&bird(), &mut groups), 0);

        groups[0].shift_left(100.0);
        assert_eq!(score_passed_pipes(&bird(), &mut groups), 0);
    }

    #[test]
    fn test_center_boundary() {
        // Pipe center 41 + 26 = 67 == bird center: not yet passed
        let mut groups = vec![PipeGroup::with_layout(PipeLayout::Both, 41.0, 200.0, 150.0)];
        assert_eq!(score_passed_pipes(&bird(), &mut groups), 0);
        groups[0].shift_left(1.0);
        assert_eq!(score_passed_pipes(&bird(), &mut groups), 1);
    }

    #[test]
    fn test_single_pipe_groups_score() {
        let mut groups = vec![
            PipeGroup::with_layout(PipeLayout::TopOnly, 10.0, 200.0, 150.0),
            PipeGroup::with_layout(PipeLayout::BottomOnly, 20.0, 200.0, 150.0),
            PipeGroup::with_layout(PipeLayout::Both, 300.0, 200.0, 150.0),
        ];
        assert_eq!(score_passed_pipes(&bird(), &mut groups), 2);
        assert!(!groups[2].scored);
    }

    #[test]
    fn test_reference_is_bottom_pipe() {
        let top = Rect::new(10.0, -120.0, PIPE_WIDTH, PIPE_HEIGHT);
        let bottom = Rect::new(200.0, 350.0, PIPE_WIDTH, PIPE_HEIGHT);
        let mut groups = vec![PipeGroup::new(Some(top), Some(bottom)).unwrap()];
        assert_eq!(score_passed_pipes(&bird(), &mut groups), 0);
    }
}
