//! Capability traits for model objects
//!
//! The import engine and the diff engine never see concrete model types;
//! they work through the narrow interfaces defined here. A model opts into
//! being imported by implementing [`ImportTarget`], into diffable
//! collections by implementing [`Identified`], and its `Vec` fields become
//! importable collections for free through the blanket
//! [`ImportCollection`] impl.

mod value;

pub use value::{FieldValue, IdentityValue};

/// A model object that accepts field writes from the import engine.
pub trait ImportTarget {
    /// Registered mapping name for this model type
    fn type_name(&self) -> &str;

    /// Write a coerced value into the named field.
    ///
    /// Implementations decide how [`FieldValue::Null`] maps onto the
    /// field's zero value. Unknown field names should be ignored.
    fn set_field(&mut self, field: &str, value: FieldValue);

    /// Current value of a scalar field, or `None` for unknown fields
    fn field(&self, field: &str) -> Option<FieldValue>;

    /// Mutable access to a related object field, creating the related
    /// object on first access. Returning `None` means the model has no
    /// such relationship.
    fn nested_object(&mut self, field: &str) -> Option<&mut dyn ImportTarget> {
        let _ = field;
        None
    }

    /// Mutable access to a related collection field. Returning `None`
    /// means the model has no such relationship.
    fn nested_collection(&mut self, field: &str) -> Option<&mut dyn ImportCollection> {
        let _ = field;
        None
    }
}

/// A model object that exposes a stable identity for diffing.
///
/// Implementations typically delegate to their scalar fields:
///
/// ```ignore
/// fn identity_value(&self, key_path: &str) -> Option<IdentityValue> {
///     self.field(key_path).and_then(|value| value.as_identity())
/// }
/// ```
pub trait Identified {
    /// The identity value at `key_path`, or `None` when the object has
    /// nothing identity-shaped there
    fn identity_value(&self, key_path: &str) -> Option<IdentityValue>;
}

/// An ordered collection of related model objects that the import engine
/// can grow and mutate in place.
pub trait ImportCollection {
    /// Number of elements currently held
    fn len(&self) -> usize;

    /// Whether the collection is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mutable access to the element at `index`
    fn get_mut(&mut self, index: usize) -> &mut dyn ImportTarget;

    /// Append a default-constructed element and return it
    fn push_new(&mut self) -> &mut dyn ImportTarget;

    /// Identity of the element at `index`, used to resolve raw entries
    /// against existing elements
    fn identity_at(&self, index: usize, key_path: &str) -> Option<IdentityValue>;
}

impl<T> ImportCollection for Vec<T>
where
    T: ImportTarget + Identified + Default,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get_mut(&mut self, index: usize) -> &mut dyn ImportTarget {
        &mut self[index]
    }

    fn push_new(&mut self) -> &mut dyn ImportTarget {
        self.push(T::default());
        let last = Vec::len(self) - 1;
        &mut self[last]
    }

    fn identity_at(&self, index: usize, key_path: &str) -> Option<IdentityValue> {
        self.get(index).and_then(|item| item.identity_value(key_path))
    }
}
