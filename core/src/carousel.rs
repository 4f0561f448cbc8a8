use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which way a carousel step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Forward,
    Back,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("item {0} is out of bounds")]
    OutOfBounds(usize),
}

/// Index over a fixed-length collection with wrap-around navigation and an
/// optional detail view over one item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Carousel {
    len: usize,
    index: usize,
    selected: Option<usize>,
}

impl Carousel {
    /// Creates a carousel over `len` items, starting at the first.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Carousel {
            len,
            index: 0,
            selected: None,
        })
    }

    /// Steps one item forward or back, wrapping at both ends.
    /// Returns the new index.
    pub fn advance(&mut self, direction: Direction) -> usize {
        self.index = match direction {
            Direction::Forward => (self.index + 1) % self.len,
            Direction::Back => (self.index + self.len - 1) % self.len,
        };
        self.index
    }

    /// Opens the detail view over one item.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfBounds(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Opens the detail view over the item currently in view.
    pub fn select_current(&mut self) {
        self.selected = Some(self.index);
    }

    /// Closes the detail view. The carousel position is unchanged.
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_create_empty_carousel() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn starts_at_first_item_with_nothing_selected() {
        let carousel = Carousel::new(4).unwrap();

        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.selected(), None);
    }

    #[test]
    fn advancing_forward_wraps_at_the_end() {
        let mut carousel = Carousel::new(3).unwrap();

        assert_eq!(carousel.advance(Direction::Forward), 1);
        assert_eq!(carousel.advance(Direction::Forward), 2);
        assert_eq!(carousel.advance(Direction::Forward), 0);
    }

    #[test]
    fn advancing_back_from_first_item_wraps_to_last() {
        let mut carousel = Carousel::new(5).unwrap();

        assert_eq!(carousel.advance(Direction::Back), 4);
    }

    #[test]
    fn index_stays_in_bounds_under_any_advance_sequence() {
        for len in 1..=6 {
            let mut carousel = Carousel::new(len).unwrap();
            let steps = [
                Direction::Back,
                Direction::Forward,
                Direction::Forward,
                Direction::Back,
                Direction::Back,
                Direction::Back,
                Direction::Forward,
            ];
            for step in steps.iter().cycle().take(50) {
                carousel.advance(*step);
                assert!(carousel.index() < len);
            }
        }
    }

    #[test]
    fn forward_then_back_returns_to_the_same_item() {
        let mut carousel = Carousel::new(9).unwrap();
        carousel.advance(Direction::Forward);
        carousel.advance(Direction::Forward);
        let at = carousel.index();

        carousel.advance(Direction::Forward);
        carousel.advance(Direction::Back);

        assert_eq!(carousel.index(), at);
    }

    #[test]
    fn single_item_carousel_always_stays_at_zero() {
        let mut carousel = Carousel::new(1).unwrap();

        assert_eq!(carousel.advance(Direction::Forward), 0);
        assert_eq!(carousel.advance(Direction::Back), 0);
    }

    #[test]
    fn can_open_and_close_detail_view_without_moving() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.advance(Direction::Forward);

        carousel.select(2).unwrap();
        assert_eq!(carousel.selected(), Some(2));

        carousel.close();
        assert_eq!(carousel.selected(), None);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn select_current_opens_the_item_in_view() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.advance(Direction::Forward);

        carousel.select_current();

        assert_eq!(carousel.selected(), Some(1));
    }

    #[test]
    fn cannot_select_out_of_bounds_item() {
        let mut carousel = Carousel::new(3).unwrap();

        assert_eq!(carousel.select(3), Err(CarouselError::OutOfBounds(3)));
        assert_eq!(carousel.selected(), None);
    }
}
