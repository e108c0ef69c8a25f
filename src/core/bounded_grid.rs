use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Row-major grid of cells. Cloning is a deep copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(height: i32, width: i32, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(height, width);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    /// Row-major cell index. Only meaningful for positions inside the bounds.
    pub fn index_of(&self, pos: &Vec2) -> usize {
        (pos.i * self.bounds.extent.j + pos.j) as usize
    }

    pub fn position_of(&self, index: usize) -> Vec2 {
        let width = self.bounds.extent.j as usize;
        Vec2 {
            i: (index / width) as i32,
            j: (index % width) as i32,
        }
    }

    /// Every cell in row-major order, paired with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (self.position_of(index), cell))
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_outside_bounds_is_none() {
        let grid = BoundedGrid::new_with_size(2, 3, 0u8);

        assert_eq!(grid.get(&Vec2 { i: 1, j: 2 }), Some(&0));
        assert_eq!(grid.get(&Vec2 { i: 2, j: 0 }), None);
        assert_eq!(grid.get(&Vec2 { i: 0, j: 3 }), None);
        assert_eq!(grid.get(&Vec2 { i: -1, j: 0 }), None);
    }

    #[test]
    fn index_is_row_major() {
        let mut grid = BoundedGrid::new_with_size(2, 3, 0u8);
        grid[&Vec2 { i: 1, j: 0 }] = 7;

        assert_eq!(grid.index_of(&Vec2 { i: 1, j: 0 }), 3);
        assert_eq!(grid.position_of(5), Vec2 { i: 1, j: 2 });
        let sevens: Vec<Vec2> = grid.iter().filter(|(_, v)| **v == 7).map(|(p, _)| p).collect();
        assert_eq!(sevens, vec![Vec2 { i: 1, j: 0 }]);
    }

    #[test]
    fn clone_is_deep() {
        let parent = BoundedGrid::new_with_size(1, 2, 0u8);
        let mut child = parent.clone();
        child[&Vec2 { i: 0, j: 1 }] = 1;

        assert_eq!(parent[&Vec2 { i: 0, j: 1 }], 0);
        assert_ne!(parent, child);
    }
}
