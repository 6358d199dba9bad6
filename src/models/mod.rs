//! Plain data implementations of the metadata contracts.
//!
//! Every struct derives serde, so metadata graphs can be written as YAML and
//! validated directly. Nothing here is checked on construction: invalid values
//! are representable on purpose so that the validators can report them.

pub mod citation;
pub mod extent;

pub use citation::{
    SimpleAddress, SimpleCitation, SimpleCitationDate, SimpleContact, SimpleIdentifier,
    SimpleIndividual, SimpleOnlineResource, SimpleOrganisation, SimpleParty, SimpleResponsibility,
    SimpleTelephone,
};
pub use extent::{
    SimpleBoundingPolygon, SimpleExtent, SimpleGeographicBoundingBox, SimpleGeographicDescription,
    SimpleGeographicExtent, SimpleTemporalExtent, SimpleVerticalExtent,
};

/// Borrows an owned optional collection as the contract's
/// `Option<Vec<Option<&U>>>` shape.
fn view<'a, T, U, F>(items: &'a Option<Vec<Option<T>>>, as_view: F) -> Option<Vec<Option<&'a U>>>
where
    U: ?Sized,
    F: Fn(&'a T) -> &'a U,
{
    items
        .as_ref()
        .map(|items| items.iter().map(|item| item.as_ref().map(&as_view)).collect())
}

fn texts(items: &Option<Vec<Option<String>>>) -> Option<Vec<Option<&str>>> {
    view(items, String::as_str)
}
