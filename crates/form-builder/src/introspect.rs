// File: form-builder/src/introspect.rs
// Purpose: Introspection traits the extractor walks instead of runtime reflection

use crate::value::Value;

/// Whether a member is visible outside the record's module
///
/// Only `pub` fields count as public; `pub(crate)` and narrower are private.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// What a member resolves to
pub enum Node<'a> {
    /// A scalar value that becomes one field
    Leaf(Value),
    /// A nested record borrowed from its parent
    Record(&'a dyn Introspectable),
    /// A zero-valued record standing in for an absent `Option`
    Synthesized(Box<dyn Introspectable>),
    /// A member whose value is never read
    ///
    /// Private members always carry this. On a public member it yields a
    /// field with a `Null` value.
    Opaque,
}

impl<'a> Node<'a> {
    /// The record behind this node, if any
    pub fn as_record(&self) -> Option<&dyn Introspectable> {
        match self {
            Node::Record(record) => Some(*record),
            Node::Synthesized(record) => Some(record.as_ref()),
            Node::Leaf(_) | Node::Opaque => None,
        }
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Node::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Node::Synthesized(record) => {
                f.debug_tuple("Synthesized").field(&record.type_name()).finish()
            }
            Node::Opaque => f.write_str("Opaque"),
        }
    }
}

/// One named slot of a record, in declaration order
#[derive(Debug)]
pub struct Member<'a> {
    pub name: &'static str,
    pub tag: Option<&'static str>,
    pub visibility: Visibility,
    pub node: Node<'a>,
}

impl<'a> Member<'a> {
    pub fn public(name: &'static str, tag: Option<&'static str>, node: Node<'a>) -> Self {
        Self {
            name,
            tag,
            visibility: Visibility::Public,
            node,
        }
    }

    /// A private member; its value is never exposed
    pub fn private(name: &'static str, tag: Option<&'static str>) -> Self {
        Self {
            name,
            tag,
            visibility: Visibility::Private,
            node: Node::Opaque,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A record whose members can be enumerated
///
/// Implemented by `#[derive(Form)]`, or by hand for types the derive can't
/// describe.
///
/// # Example
///
/// ```
/// use form_builder::{FormValue, Introspectable, Member, Node};
///
/// struct Login {
///     pub user: String,
///     secret: String,
/// }
///
/// impl Introspectable for Login {
///     fn type_name(&self) -> &'static str {
///         "Login"
///     }
///
///     fn members(&self) -> Vec<Member<'_>> {
///         vec![
///             Member::public("user", Some("type=email"), self.user.form_node()),
///             Member::private("secret", None),
///         ]
///     }
/// }
///
/// impl FormValue for Login {
///     fn form_node(&self) -> Node<'_> {
///         Node::Record(self)
///     }
///
///     fn into_node(self) -> Node<'static>
///     where
///         Self: Sized + 'static,
///     {
///         Node::Synthesized(Box::new(self))
///     }
/// }
///
/// let login = Login { user: "alice".into(), secret: "hunter2".into() };
/// let fields = form_builder::fields(&login).unwrap();
/// assert_eq!(fields.len(), 1);
/// assert_eq!(fields[0].field_type, "email");
/// ```
pub trait Introspectable {
    fn type_name(&self) -> &'static str;

    /// All members, private ones included, in declaration order
    fn members(&self) -> Vec<Member<'_>>;
}

/// Anything that can sit in a record member
pub trait FormValue {
    /// Resolve a borrowed value
    fn form_node(&self) -> Node<'_>;

    /// Resolve an owned value; used for the zero instance of an absent `Option`
    fn into_node(self) -> Node<'static>
    where
        Self: Sized + 'static;
}

macro_rules! impl_leaf {
    ($($ty:ty),*) => {
        $(
            impl FormValue for $ty {
                fn form_node(&self) -> Node<'_> {
                    Node::Leaf(Value::from(self.clone()))
                }

                fn into_node(self) -> Node<'static>
                where
                    Self: Sized + 'static,
                {
                    Node::Leaf(Value::from(self))
                }
            }
        )*
    };
}

impl_leaf!(
    String, bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl FormValue for &str {
    fn form_node(&self) -> Node<'_> {
        Node::Leaf(Value::from(*self))
    }

    fn into_node(self) -> Node<'static>
    where
        Self: Sized + 'static,
    {
        Node::Leaf(Value::from(self))
    }
}

/// Borrowed members resolve through the reference.
impl<T> FormValue for &T
where
    T: FormValue + ?Sized,
{
    fn form_node(&self) -> Node<'_> {
        (**self).form_node()
    }

    fn into_node(self) -> Node<'static>
    where
        Self: Sized + 'static,
    {
        // `&'static T` lives long enough to be borrowed as is
        T::form_node(self)
    }
}

impl FormValue for Value {
    fn form_node(&self) -> Node<'_> {
        Node::Leaf(self.clone())
    }

    fn into_node(self) -> Node<'static>
    where
        Self: Sized + 'static,
    {
        Node::Leaf(self)
    }
}

/// `None` resolves to the zero value of `T`, so nested records still
/// contribute their fields.
impl<T> FormValue for Option<T>
where
    T: FormValue + Default + 'static,
{
    fn form_node(&self) -> Node<'_> {
        match self {
            Some(value) => value.form_node(),
            None => T::default().into_node(),
        }
    }

    fn into_node(self) -> Node<'static>
    where
        Self: Sized + 'static,
    {
        self.unwrap_or_default().into_node()
    }
}

impl<T> FormValue for Box<T>
where
    T: FormValue + 'static,
{
    fn form_node(&self) -> Node<'_> {
        self.as_ref().form_node()
    }

    fn into_node(self) -> Node<'static>
    where
        Self: Sized + 'static,
    {
        (*self).into_node()
    }
}
