use crate::facility::Facility;

/// All facilities of the municipal dataset in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    facilities: Vec<Facility>,
}

impl Catalog {
    pub const fn new(facilities: Vec<Facility>) -> Self {
        Self { facilities }
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.iter()
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

impl FromIterator<Facility> for Catalog {
    fn from_iter<I: IntoIterator<Item = Facility>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
