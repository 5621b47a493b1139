use std::{collections::TryReserveError, fmt};

/// Distinguishes the two kinds of symbol an expression can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A single named number, such as `x`.
    Scalar,
    /// A named sequence of numbers, such as `A` in `A[2]`.
    Array,
}

/// A named single numeric value.
///
/// Created with value `0` and overwritten by the values loader.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarSymbol {
    /// Name of the symbol.
    pub name:  String,
    /// Current value.
    pub value: f64,
}

impl ScalarSymbol {
    /// Creates a scalar symbol with value `0`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:  name.into(),
               value: 0.0, }
    }
}

impl fmt::Display for ScalarSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// A named, index-addressable sequence of numbers with a declared length.
///
/// The backing sequence is `None` until the values loader allocates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySymbol {
    /// Name of the symbol.
    pub name:   String,
    /// Backing values, allocated to the declared length on load.
    pub values: Option<Vec<f64>>,
}

impl ArraySymbol {
    /// Creates an array symbol without a backing sequence.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:   name.into(),
               values: None, }
    }

    /// Replaces the backing sequence with `length` zeros.
    ///
    /// # Errors
    /// Returns a `TryReserveError` if `length` cells cannot be allocated. The
    /// previous sequence is kept in that case.
    pub fn allocate(&mut self, length: usize) -> Result<(), TryReserveError> {
        let mut values = Vec::new();
        values.try_reserve_exact(length)?;
        values.resize(length, 0.0);
        self.values = Some(values);
        Ok(())
    }

    /// The declared length, or `None` if the array was never loaded.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.values.as_ref().map(Vec::len)
    }

    /// Returns `true` if the array has been loaded with length zero.
    ///
    /// An array that was never loaded is not empty: it has no declared length
    /// and reads `0` at every index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Reads the cell at `index`.
    ///
    /// An array that was never loaded reads `0` at every index.
    ///
    /// # Returns
    /// - `Some(f64)`: The cell value.
    /// - `None`: If `index` is not below the declared length.
    ///
    /// # Example
    /// ```
    /// use symeval::interpreter::symbols::core::ArraySymbol;
    ///
    /// let mut array = ArraySymbol::new("A");
    /// assert_eq!(array.get(100), Some(0.0));
    ///
    /// array.allocate(2).unwrap();
    /// array.values.as_mut().unwrap()[1] = 4.0;
    /// assert_eq!(array.get(1), Some(4.0));
    /// assert_eq!(array.get(2), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        match &self.values {
            Some(values) => values.get(index).copied(),
            None => Some(0.0),
        }
    }
}

impl fmt::Display for ArraySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=[", self.name)?;
        if let Some(values) = &self.values {
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
        }
        write!(f, "]")
    }
}

/// Owns the scalar and array symbols of one expression.
///
/// Both collections keep discovery order and hold at most one symbol per
/// name. A name is never present in both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    scalars: Vec<ScalarSymbol>,
    arrays:  Vec<ArraySymbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All scalar symbols in discovery order.
    #[must_use]
    pub fn scalars(&self) -> &[ScalarSymbol] {
        &self.scalars
    }

    /// All array symbols in discovery order.
    #[must_use]
    pub fn arrays(&self) -> &[ArraySymbol] {
        &self.arrays
    }

    /// Total number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scalars.len() + self.arrays.len()
    }

    /// Returns `true` if the table holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.arrays.is_empty()
    }

    /// Looks up a scalar symbol by name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&ScalarSymbol> {
        self.scalars.iter().find(|s| s.name == name)
    }

    /// Looks up a scalar symbol by name for modification.
    pub fn scalar_mut(&mut self, name: &str) -> Option<&mut ScalarSymbol> {
        self.scalars.iter_mut().find(|s| s.name == name)
    }

    /// Looks up an array symbol by name.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&ArraySymbol> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// Looks up an array symbol by name for modification.
    pub fn array_mut(&mut self, name: &str) -> Option<&mut ArraySymbol> {
        self.arrays.iter_mut().find(|a| a.name == name)
    }

    /// Reports whether `name` is a known scalar, a known array, or neither.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        if self.scalar(name).is_some() {
            Some(SymbolKind::Scalar)
        } else if self.array(name).is_some() {
            Some(SymbolKind::Array)
        } else {
            None
        }
    }

    /// Registers a scalar symbol with value `0` unless the name is already
    /// known.
    ///
    /// # Returns
    /// `true` if a new symbol was inserted.
    pub fn insert_scalar(&mut self, name: &str) -> bool {
        if self.scalar(name).is_some() {
            return false;
        }
        self.scalars.push(ScalarSymbol::new(name));
        true
    }

    /// Registers an array symbol without a backing sequence unless the name is
    /// already known.
    ///
    /// # Returns
    /// `true` if a new symbol was inserted.
    pub fn insert_array(&mut self, name: &str) -> bool {
        if self.array(name).is_some() {
            return false;
        }
        self.arrays.push(ArraySymbol::new(name));
        true
    }

    /// Current value of a scalar; names that are not in the table read `0`.
    ///
    /// # Example
    /// ```
    /// use symeval::interpreter::symbols::core::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.insert_scalar("x");
    /// table.scalar_mut("x").unwrap().value = 5.0;
    ///
    /// assert_eq!(table.scalar_value("x"), 5.0);
    /// assert_eq!(table.scalar_value("y"), 0.0);
    /// ```
    #[must_use]
    pub fn scalar_value(&self, name: &str) -> f64 {
        self.scalar(name).map_or(0.0, |s| s.value)
    }
}
