//! Ordered record schemas.
//!
//! A schema is an ordered list of columns, each pairing a name with a
//! generator that produces the column's value for one record. Column order
//! is insertion order and drives both the header and every record line.

use std::fmt;

/// Produces one value per invocation. May carry state between records.
pub type FieldGenerator = Box<dyn FnMut() -> String + Send>;

/// A named column and its value generator
pub struct Field {
    name: String,
    generator: FieldGenerator,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce the next value for this column
    pub fn generate(&mut self) -> String {
        (self.generator)()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Ordered mapping from column name to generator
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Schema::insert`]
    pub fn field<F>(mut self, name: impl Into<String>, generator: F) -> Self
    where
        F: FnMut() -> String + Send + 'static,
    {
        self.insert(name, generator);
        self
    }

    /// Add a column at the end, or replace the generator of an existing
    /// column in place. Returns true when the name was new.
    pub fn insert<F>(&mut self, name: impl Into<String>, generator: F) -> bool
    where
        F: FnMut() -> String + Send + 'static,
    {
        self.insert_boxed(name.into(), Box::new(generator))
    }

    pub fn insert_boxed(&mut self, name: String, generator: FieldGenerator) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => {
                existing.generator = generator;
                false
            }
            None => {
                self.fields.push(Field { name, generator });
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Column names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::name)
    }

    /// Invoke every generator once, in column order
    pub fn generate_values(&mut self) -> Vec<String> {
        self.fields.iter_mut().map(Field::generate).collect()
    }
}
