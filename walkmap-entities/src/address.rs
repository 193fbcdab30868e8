use crate::geo::MapPoint;

/// A candidate returned while the user is typing an address.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressSuggestion {
    pub display_name: String,
    pub pos: MapPoint,
}

/// The coordinates an address finally resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    pub name: String,
    pub pos: MapPoint,
}

impl From<AddressSuggestion> for ResolvedAddress {
    fn from(from: AddressSuggestion) -> Self {
        let AddressSuggestion { display_name, pos } = from;
        Self {
            name: display_name,
            pos,
        }
    }
}
