//! Parsing of the derive input: a struct with named fields, its
//! `#[settings(...)]` attributes and its doc comments.

use unsynn::*;

use crate::RenameRule;
use crate::unescaping::unescape;

keyword! {
    KPub = "pub";
    KDoc = "doc";
    KSettings = "settings";
    KWhere = "where";
}

unsynn! {
    /// `pub`, `pub(crate)`, `pub(in path)`
    enum Vis {
        PubIn(Cons<KPub, ParenthesisGroup>),
        Pub(KPub),
    }

    /// `#[...]`
    struct Attribute {
        _pound: Pound,
        body: BracketGroupContaining<AttributeInner>,
    }

    enum AttributeInner {
        Doc(DocInner),
        Settings(SettingsInner),
        Other(Vec<TokenTree>),
    }

    /// `doc = "..."`, which is what `///` comments turn into
    struct DocInner {
        _kw: KDoc,
        _eq: Assign,
        value: Literal,
    }

    /// `settings ...`; the arguments are checked separately
    struct SettingsInner {
        _kw: KSettings,
        args: Vec<TokenTree>,
    }

    /// `skip` or `rename = "..."`
    struct SettingsItem {
        key: Ident,
        value: Option<Cons<Assign, Literal>>,
    }

    /// A token tree where `<...>` is kept together, so the commas of
    /// generic arguments don't end a field type
    enum AngleTokenTree {
        Angle(Cons<Lt, Vec<Cons<Except<Gt>, AngleTokenTree>>, Gt>),
        Verbatim(TokenTree),
    }

    struct Generics {
        _lt: Lt,
        _params: Vec<Cons<Except<Gt>, AngleTokenTree>>,
        _gt: Gt,
    }

    struct WhereClause {
        _kw: KWhere,
        _predicates: Vec<Cons<Except<BraceGroup>, TokenTree>>,
    }

    /// Everything up to the body: `#[..] pub struct Name<..>`
    struct ItemHead {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        kind: Ident,
        name: Ident,
        generics: Option<Generics>,
    }

    struct NamedBody {
        _where: Option<WhereClause>,
        fields: BraceGroupContaining<CommaDelimitedVec<StructField>>,
    }

    struct StructField {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        name: Ident,
        _colon: Colon,
        ty: Vec<Cons<Except<Comma>, AngleTokenTree>>,
    }
}

/// A parse failure, reported as `compile_error!` at `span`
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

type Result<T> = core::result::Result<T, ParseError>;

/// A parsed struct, ready for codegen
#[derive(Debug)]
pub struct PStruct {
    pub name: Ident,
    pub fields: Vec<PField>,
}

/// A parsed named field
#[derive(Debug)]
pub struct PField {
    /// The identifier as written, possibly raw (`r#type`)
    pub ident: Ident,
    /// The key segment after rename rules
    pub effective: String,
    pub ty: TokenStream,
    pub doc: Vec<String>,
}

/// `#[settings(...)]` items found on the container or on a field
#[derive(Debug, Default)]
struct PAttrs {
    rename: Option<String>,
    rename_all: Option<RenameRule>,
    skip: bool,
    doc: Vec<String>,
}

const NAMED_FIELDS_ONLY: &str = "`Settings` can only be derived for structs with named fields";

pub fn parse_struct(input: TokenStream) -> Result<PStruct> {
    let mut iter = input.to_token_iter();

    let head = iter.parse::<ItemHead>().map_err(|err| {
        let span = err
            .failed_at()
            .map_or_else(Span::call_site, |tt| tt.span());
        ParseError::new(span, "expected `struct`")
    })?;
    if head.kind != "struct" {
        return Err(ParseError::new(head.kind.span(), NAMED_FIELDS_ONLY));
    }
    if head.generics.is_some() {
        return Err(ParseError::new(
            head.name.span(),
            "`Settings` cannot be derived for generic structs",
        ));
    }

    let attrs = PAttrs::parse(&head.attrs)?;
    if attrs.rename.is_some() || attrs.skip {
        return Err(ParseError::new(
            head.name.span(),
            "`rename` and `skip` are field attributes",
        ));
    }

    let body = iter
        .parse_all::<NamedBody>()
        .map_err(|_| ParseError::new(head.name.span(), NAMED_FIELDS_ONLY))?;

    let mut fields = Vec::new();
    for field in body.fields.content.iter() {
        if let Some(field) = PField::parse(&field.value, attrs.rename_all)? {
            fields.push(field);
        }
    }

    Ok(PStruct {
        name: head.name,
        fields,
    })
}

impl PField {
    /// `None` for `#[settings(skip)]` fields
    fn parse(field: &StructField, rename_all: Option<RenameRule>) -> Result<Option<Self>> {
        let attrs = PAttrs::parse(&field.attrs)?;
        if attrs.rename_all.is_some() {
            return Err(ParseError::new(
                field.name.span(),
                "`rename_all` is a container attribute",
            ));
        }
        if field.ty.is_empty() {
            return Err(ParseError::new(field.name.span(), "expected a field type"));
        }
        if attrs.skip {
            return Ok(None);
        }

        let raw = field.name.to_string();
        let raw = raw.strip_prefix("r#").unwrap_or(&raw);
        let effective = match (attrs.rename, rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(raw),
            (None, None) => raw.to_string(),
        };

        Ok(Some(PField {
            ident: field.name.clone(),
            effective,
            ty: field.ty.to_token_stream(),
            doc: attrs.doc,
        }))
    }
}

impl PAttrs {
    /// Keeps `doc` and `settings` attributes, ignores the rest.
    fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            match &attr.body.content {
                AttributeInner::Doc(doc) => parsed.doc.push(unescape_literal(&doc.value)?),
                AttributeInner::Settings(settings) => parsed.parse_settings(&settings.args)?,
                AttributeInner::Other(_) => {}
            }
        }
        Ok(parsed)
    }

    fn parse_settings(&mut self, args: &[TokenTree]) -> Result<()> {
        let span = args.first().map_or_else(Span::call_site, TokenTree::span);
        let mut tokens = args.iter().cloned().collect::<TokenStream>().to_token_iter();
        let items = tokens
            .parse_all::<ParenthesisGroupContaining<CommaDelimitedVec<SettingsItem>>>()
            .map_err(|_| ParseError::new(span, "expected `#[settings(...)]`"))?;

        for item in items.content.iter() {
            let SettingsItem { key, value } = &item.value;
            match (key.to_string().as_str(), value) {
                ("skip", None) => self.skip = true,
                ("rename", Some(value)) => self.rename = Some(unescape_literal(&value.second)?),
                ("rename_all", Some(value)) => {
                    let value = unescape_literal(&value.second)?;
                    let rule = RenameRule::parse(&value).ok_or_else(|| {
                        ParseError::new(
                            key.span(),
                            format!(
                                "unknown rename rule {value:?}, expected one of PascalCase, camelCase, \
                                 snake_case, kebab-case, SCREAMING_SNAKE_CASE, lowercase, UPPERCASE"
                            ),
                        )
                    })?;
                    self.rename_all = Some(rule);
                }
                ("skip", Some(_)) => {
                    return Err(ParseError::new(key.span(), "`skip` takes no value"));
                }
                ("rename" | "rename_all", None) => {
                    return Err(ParseError::new(
                        key.span(),
                        format!("expected `{key} = \"...\"`"),
                    ));
                }
                _ => {
                    return Err(ParseError::new(
                        key.span(),
                        format!(
                            "unknown settings attribute `{key}`, expected `rename`, `rename_all` or `skip`"
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn unescape_literal(lit: &Literal) -> Result<String> {
    unescape(&lit.to_string()).map_err(|e| ParseError::new(lit.span(), e.to_string()))
}
