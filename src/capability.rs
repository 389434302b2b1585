use core::fmt;

use thiserror::Error;

/// How a position within a range may be advanced and compared.
///
/// Categories are totally ordered: each one offers everything the previous one does.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum IterCategory {
    /// Single pass. Positions cannot be duplicated.
    Input,
    /// Multi-pass. Positions can be duplicated and compared.
    Forward,
    /// Multi-pass and reversible.
    Bidirectional,
    /// Reversible with constant-time jumps by an arbitrary offset.
    RandomAccess,
}

impl IterCategory {
    /// All categories from weakest to strongest.
    pub const ALL: [IterCategory; 4] = [
        IterCategory::Input,
        IterCategory::Forward,
        IterCategory::Bidirectional,
        IterCategory::RandomAccess,
    ];

    /// Returns `true` if `self` offers at least what `other` does.
    ///
    /// ```
    /// use wabi_range::IterCategory;
    ///
    /// assert!(IterCategory::RandomAccess.at_least(IterCategory::Forward));
    /// assert!(!IterCategory::Input.at_least(IterCategory::Forward));
    /// ```
    #[must_use]
    pub const fn at_least(self, other: IterCategory) -> bool {
        self as u8 >= other as u8
    }

    const fn name(self) -> &'static str {
        match self {
            IterCategory::Input => "input",
            IterCategory::Forward => "forward",
            IterCategory::Bidirectional => "bidirectional",
            IterCategory::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for IterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What dereferencing a position yields.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ReferenceKind {
    /// A reference into the backing storage.
    Reference,
    /// A temporary value standing in for the element.
    Proxy,
}

/// Whether a range value may be duplicated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Copyability {
    Copyable,
    /// The range can only be transferred, modelling a non-rewindable source.
    MoveOnly,
}

/// A combination of capabilities that violates the minimum requirements of its category.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CapabilityError {
    #[error("{0} ranges must have comparable positions")]
    MultiPassNotComparable(IterCategory),
    #[error("random-access ranges must be sized")]
    RandomAccessUnsized,
    #[error("random-access ranges must be differenceable")]
    RandomAccessNotDifferenceable,
    #[error("input ranges cannot be common: a single-pass position cannot mark its own end")]
    CommonInput,
}

/// The full behavioural contract of a range.
///
/// A descriptor is plain data. [`TestRange`](crate::TestRange) derives one from its type
/// parameters, and every ordinary source implementing [`InputRange`](crate::InputRange)
/// declares one.
///
/// # Examples
///
/// ```
/// use wabi_range::{Capabilities, CapabilityError, Copyability, IterCategory, ReferenceKind};
///
/// let caps = Capabilities::derived(
///     IterCategory::RandomAccess,
///     true,
///     ReferenceKind::Reference,
///     Copyability::MoveOnly,
/// );
/// assert!(caps.sized && caps.differenceable && caps.comparable);
/// assert_eq!(caps.validate(), Ok(()));
///
/// let broken = Capabilities { sized: false, ..caps };
/// assert_eq!(broken.validate(), Err(CapabilityError::RandomAccessUnsized));
/// assert_eq!(broken.normalized(), caps);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Capabilities {
    pub category: IterCategory,
    /// The number of elements is known without walking the range.
    pub sized: bool,
    /// The distance between two positions can be computed.
    pub differenceable: bool,
    /// Begin and end positions have the same type.
    pub common: bool,
    /// Two positions can be compared for equality.
    pub comparable: bool,
    pub reference: ReferenceKind,
    pub copyability: Copyability,
}

impl Capabilities {
    /// A borrowed contiguous sequence: arrays, slices and `Vec`.
    pub const CONTIGUOUS: Capabilities = Capabilities {
        category: IterCategory::RandomAccess,
        sized: true,
        differenceable: true,
        common: true,
        comparable: true,
        reference: ReferenceKind::Reference,
        copyability: Copyability::Copyable,
    };

    /// A borrowed doubly linked list.
    pub const LINKED: Capabilities = Capabilities {
        category: IterCategory::Bidirectional,
        sized: true,
        differenceable: false,
        common: true,
        comparable: true,
        reference: ReferenceKind::Reference,
        copyability: Copyability::Copyable,
    };

    /// Builds a descriptor whose sizedness, difference and comparison follow from `category`.
    ///
    /// Random-access ranges are sized and differenceable, everything from forward up is
    /// comparable, and nothing else is. This is the convention the dispatcher enumerates.
    #[must_use]
    pub const fn derived(
        category: IterCategory,
        common: bool,
        reference: ReferenceKind,
        copyability: Copyability,
    ) -> Self {
        let random = category.at_least(IterCategory::RandomAccess);
        Capabilities {
            category,
            sized: random,
            differenceable: random,
            common,
            comparable: category.at_least(IterCategory::Forward),
            reference,
            copyability,
        }
    }

    /// Checks the descriptor against the minimum requirements of its category.
    ///
    /// # Errors
    ///
    /// Returns the first violated requirement.
    pub const fn validate(&self) -> Result<(), CapabilityError> {
        if self.category.at_least(IterCategory::Forward) && !self.comparable {
            return Err(CapabilityError::MultiPassNotComparable(self.category));
        }
        if self.category.at_least(IterCategory::RandomAccess) {
            if !self.sized {
                return Err(CapabilityError::RandomAccessUnsized);
            }
            if !self.differenceable {
                return Err(CapabilityError::RandomAccessNotDifferenceable);
            }
        }
        if matches!(self.category, IterCategory::Input) && self.common {
            return Err(CapabilityError::CommonInput);
        }
        Ok(())
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the nearest valid descriptor.
    ///
    /// Missing category minimums are granted and a common input range becomes non-common.
    /// A valid descriptor is returned unchanged.
    #[must_use]
    pub const fn normalized(self) -> Self {
        let mut caps = self;
        if caps.category.at_least(IterCategory::Forward) {
            caps.comparable = true;
        }
        if caps.category.at_least(IterCategory::RandomAccess) {
            caps.sized = true;
            caps.differenceable = true;
        }
        if matches!(caps.category, IterCategory::Input) {
            caps.common = false;
        }
        caps
    }

    /// Returns `true` if dereferencing yields references to distinct backing elements.
    ///
    /// Only such ranges have their insertion results compared by the [`oracle`](crate::oracle).
    #[must_use]
    pub const fn yields_references(&self) -> bool {
        matches!(self.reference, ReferenceKind::Reference)
    }

    /// Enumerates every legal combination the dispatcher visits, in visiting order.
    ///
    /// The order is reference kind, then copyability, then category, then commonality, with
    /// sizedness, difference and comparison [`derived`](Self::derived) from the category.
    /// Common input ranges are skipped.
    ///
    /// ```
    /// use wabi_range::{Capabilities, IterCategory};
    ///
    /// let all: Vec<_> = Capabilities::enumerate().collect();
    /// assert_eq!(all.len(), 28);
    /// assert_eq!(all[0].category, IterCategory::Input);
    /// assert!(all.iter().all(Capabilities::is_valid));
    /// ```
    pub fn enumerate() -> impl Iterator<Item = Capabilities> {
        [ReferenceKind::Reference, ReferenceKind::Proxy]
            .into_iter()
            .flat_map(|reference| {
                [Copyability::Copyable, Copyability::MoveOnly]
                    .into_iter()
                    .map(move |copyability| (reference, copyability))
            })
            .flat_map(|(reference, copyability)| {
                IterCategory::ALL.into_iter().flat_map(move |category| {
                    [false, true]
                        .into_iter()
                        .map(move |common| Capabilities::derived(category, common, reference, copyability))
                })
            })
            .filter(Capabilities::is_valid)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}{}{}{}",
            self.category,
            if self.common { "common" } else { "non-common" },
            match self.copyability {
                Copyability::Copyable => "copyable",
                Copyability::MoveOnly => "move-only",
            },
            match self.reference {
                ReferenceKind::Reference => "reference",
                ReferenceKind::Proxy => "proxy",
            },
            if self.sized { " +sized" } else { "" },
            if self.differenceable { " +difference" } else { "" },
            if self.comparable { " +compare" } else { "" },
        )
    }
}
