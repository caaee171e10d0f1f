//! Leaf commands: term declarations, the term-consumption state machine and
//! the typed result bag handed to the command's callback.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use crate::error::{DeclError, Error};
use crate::help;
use crate::parser::Ctx;
use crate::token::{self, Token};
use crate::value::{self, TermType, TermValue};

/// A named, typed term supplied as `--name=value`, `--name value`,
/// `-alias=value` or `-alias value`.
pub struct OptionDef {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
    pub(crate) description: String,
    pub(crate) ty: TermType,
    pub(crate) required: bool,
}

impl OptionDef {
    /// Declares an option. Panics if `name` is empty, starts with a dash or
    /// contains anything outside letters and digits.
    pub fn new(name: &str, ty: TermType) -> OptionDef {
        if !token::is_valid_name(name) {
            panic!("{}", DeclError::InvalidOptionNameOrAlias(name.to_string()));
        }
        OptionDef {
            name: name.to_string(),
            alias: None,
            description: String::new(),
            ty,
            required: false,
        }
    }

    /// Sets the single-dash short form. Panics on an invalid alias.
    pub fn alias(mut self, alias: &str) -> OptionDef {
        if !token::is_valid_name(alias) {
            panic!("{}", DeclError::InvalidOptionNameOrAlias(alias.to_string()));
        }
        self.alias = Some(alias.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> OptionDef {
        self.description = text.to_string();
        self
    }

    pub fn required(mut self) -> OptionDef {
        self.required = true;
        self
    }
}

/// A named, untyped, presence-only term supplied as `--name` or `-alias`.
pub struct FlagDef {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
    pub(crate) description: String,
}

impl FlagDef {
    /// Declares a flag. Panics on an invalid name, as [`OptionDef::new`].
    pub fn new(name: &str) -> FlagDef {
        if !token::is_valid_name(name) {
            panic!("{}", DeclError::InvalidFlagNameOrAlias(name.to_string()));
        }
        FlagDef { name: name.to_string(), alias: None, description: String::new() }
    }

    /// Sets the single-dash short form. Panics on an invalid alias.
    pub fn alias(mut self, alias: &str) -> FlagDef {
        if !token::is_valid_name(alias) {
            panic!("{}", DeclError::InvalidFlagNameOrAlias(alias.to_string()));
        }
        self.alias = Some(alias.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> FlagDef {
        self.description = text.to_string();
        self
    }
}

/// A positional, typed term. Declaration order fixes consumption order.
pub struct ArgDef {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) ty: TermType,
}

impl ArgDef {
    /// Declares a positional argument. The name only appears in help text
    /// and error messages. Panics if it is empty.
    pub fn new(name: &str, ty: TermType) -> ArgDef {
        if name.is_empty() {
            panic!("{}", DeclError::InvalidArgName(name.to_string()));
        }
        ArgDef { name: name.to_string(), description: String::new(), ty }
    }

    pub fn description(mut self, text: &str) -> ArgDef {
        self.description = text.to_string();
        self
    }
}

type Callback = Box<dyn Fn(&TermsSet<'_>) + Send + Sync>;

/// A leaf parser: a fixed term set plus a callback invoked exactly once on a
/// successful parse. Immutable once built, so it can be shared across
/// concurrent parse invocations.
pub struct Cmd {
    callback: Callback,
    pub(crate) options: Vec<OptionDef>,
    opt_by_name: HashMap<String, usize>,
    opt_by_alias: HashMap<String, usize>,
    pub(crate) flags: Vec<FlagDef>,
    flag_by_name: HashMap<String, usize>,
    flag_by_alias: HashMap<String, usize>,
    pub(crate) args: Vec<ArgDef>,
    arg_by_name: HashMap<String, usize>,
}

impl Cmd {
    pub fn new(callback: impl Fn(&TermsSet<'_>) + Send + Sync + 'static) -> Cmd {
        Cmd {
            callback: Box::new(callback),
            options: Vec::new(),
            opt_by_name: HashMap::new(),
            opt_by_alias: HashMap::new(),
            flags: Vec::new(),
            flag_by_name: HashMap::new(),
            flag_by_alias: HashMap::new(),
            args: Vec::new(),
            arg_by_name: HashMap::new(),
        }
    }

    /// Adds an option. Options and flags share the `--name`/`-alias` token
    /// space, so a name or alias already taken by either panics.
    pub fn option(mut self, def: OptionDef) -> Cmd {
        self.check_unique(&def.name, def.alias.as_deref());
        let idx = self.options.len();
        self.opt_by_name.insert(def.name.clone(), idx);
        if let Some(alias) = &def.alias {
            self.opt_by_alias.insert(alias.clone(), idx);
        }
        self.options.push(def);
        self
    }

    /// Adds a flag. Same uniqueness rules as [`Cmd::option`].
    pub fn flag(mut self, def: FlagDef) -> Cmd {
        self.check_unique(&def.name, def.alias.as_deref());
        let idx = self.flags.len();
        self.flag_by_name.insert(def.name.clone(), idx);
        if let Some(alias) = &def.alias {
            self.flag_by_alias.insert(alias.clone(), idx);
        }
        self.flags.push(def);
        self
    }

    /// Adds a positional argument after those already declared. Panics on a
    /// duplicate argument name.
    pub fn arg(mut self, def: ArgDef) -> Cmd {
        if self.arg_by_name.contains_key(&def.name) {
            panic!("{}", DeclError::DuplicateArgName(def.name.clone()));
        }
        self.arg_by_name.insert(def.name.clone(), self.args.len());
        self.args.push(def);
        self
    }

    fn check_unique(&self, name: &str, alias: Option<&str>) {
        if self.opt_by_name.contains_key(name) || self.flag_by_name.contains_key(name) {
            panic!("{}", DeclError::DuplicateName(name.to_string()));
        }
        if let Some(alias) = alias {
            if self.opt_by_alias.contains_key(alias) || self.flag_by_alias.contains_key(alias) {
                panic!("{}", DeclError::DuplicateAlias(alias.to_string()));
            }
        }
    }

    /// Parse-time lookup: the dash form picks the table, `-x` only resolves
    /// through aliases and `--x` only through names.
    fn lookup_option(&self, name: &str, alias: bool) -> Option<&OptionDef> {
        let table = if alias { &self.opt_by_alias } else { &self.opt_by_name };
        table.get(name).map(|&idx| &self.options[idx])
    }

    fn lookup_flag(&self, name: &str, alias: bool) -> Option<&FlagDef> {
        let table = if alias { &self.flag_by_alias } else { &self.flag_by_name };
        table.get(name).map(|&idx| &self.flags[idx])
    }

    /// Getter-time lookup: name first, then alias.
    fn option_by_key(&self, key: &str) -> Option<&OptionDef> {
        self.lookup_option(key, false).or_else(|| self.lookup_option(key, true))
    }

    fn flag_by_key(&self, key: &str) -> Option<&FlagDef> {
        self.lookup_flag(key, false).or_else(|| self.lookup_flag(key, true))
    }

    fn arg_named(&self, name: &str) -> Option<&ArgDef> {
        self.arg_by_name.get(name).map(|&idx| &self.args[idx])
    }

    /// Walks `tokens` left to right, consuming one or two per step and never
    /// backtracking, then runs the termination checks and the callback.
    pub(crate) fn parse(
        &self,
        ctx: &Ctx<'_>,
        tokens: &[String],
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let mut terms = TermsSet {
            cmd: self,
            options: HashMap::new(),
            flags: HashSet::new(),
            args: HashMap::new(),
        };

        let mut i = 0;
        while i < tokens.len() {
            let raw = tokens[i].as_str();

            if token::is_help(raw) {
                help::print_cmd(self, ctx, out);
                return Ok(());
            }

            match token::classify(raw) {
                Token::OptWithValue { name, value, alias } => {
                    let opt = self.lookup_option(name, alias).ok_or_else(|| {
                        Error::UnexpectedOption { name: name.to_string(), is_alias: alias }
                    })?;

                    if value.is_empty() {
                        return Err(Error::OptionExpectsValue {
                            name: name.to_string(),
                            is_alias: alias,
                        });
                    }

                    let value = value::coerce(opt.ty, value).ok_or_else(|| {
                        Error::OptionExpectsType {
                            name: name.to_string(),
                            is_alias: alias,
                            expected: opt.ty,
                        }
                    })?;

                    terms.options.insert(opt.name.clone(), value);
                    i += 1;
                }
                Token::Opt { name, alias } => {
                    if let Some(opt) = self.lookup_option(name, alias) {
                        // The value, if any, is the next token, as long as
                        // that token would not itself parse as an option.
                        match tokens.get(i + 1) {
                            Some(next) if !token::is_option_like(next) => {
                                let value = value::coerce(opt.ty, next).ok_or_else(|| {
                                    Error::OptionExpectsType {
                                        name: name.to_string(),
                                        is_alias: alias,
                                        expected: opt.ty,
                                    }
                                })?;

                                terms.options.insert(opt.name.clone(), value);
                                i += 2;
                            }
                            _ => {
                                return Err(Error::OptionExpectsValue {
                                    name: name.to_string(),
                                    is_alias: alias,
                                });
                            }
                        }
                    } else if let Some(flag) = self.lookup_flag(name, alias) {
                        terms.flags.insert(flag.name.clone());
                        i += 1;
                    } else {
                        return Err(Error::UnexpectedOptionOrFlag {
                            name: name.to_string(),
                            is_alias: alias,
                        });
                    }
                }
                Token::Plain(word) => {
                    // Positional slots fill in strict declaration order.
                    let pos = terms.args.len();
                    let arg = self
                        .args
                        .get(pos)
                        .ok_or_else(|| Error::UnexpectedArg { value: word.to_string() })?;

                    let value = value::coerce(arg.ty, word).ok_or_else(|| {
                        Error::ArgExpectsType {
                            pos,
                            name: arg.name.clone(),
                            expected: arg.ty,
                            value: word.to_string(),
                        }
                    })?;

                    terms.args.insert(arg.name.clone(), value);
                    i += 1;
                }
            }
        }

        if terms.args.len() != self.args.len() {
            let missing = self
                .args
                .iter()
                .filter(|arg| !terms.args.contains_key(&arg.name))
                .map(|arg| arg.name.clone())
                .collect();
            return Err(Error::MissingArgs { missing });
        }

        // First missing required option in declaration order wins.
        for opt in self.options.iter().filter(|opt| opt.required) {
            if !terms.options.contains_key(&opt.name) {
                return Err(Error::RequiredOption { name: opt.name.clone() });
            }
        }

        (self.callback)(&terms);

        Ok(())
    }
}

/// The typed, read-only bag of values produced by a successful parse.
///
/// Getters accept a term's name or alias. A lookup for a term that was not
/// declared, was declared with a different type, or was simply not supplied
/// returns the type's zero value rather than erroring.
pub struct TermsSet<'a> {
    cmd: &'a Cmd,
    options: HashMap<String, TermValue>,
    flags: HashSet<String>,
    args: HashMap<String, TermValue>,
}

impl TermsSet<'_> {
    pub fn opt_str(&self, name_or_alias: &str) -> &str {
        match self.cmd.option_by_key(name_or_alias) {
            Some(opt) if opt.ty == TermType::Str => {
                self.options.get(&opt.name).and_then(TermValue::as_str).unwrap_or("")
            }
            _ => "",
        }
    }

    pub fn opt_int(&self, name_or_alias: &str) -> i64 {
        match self.cmd.option_by_key(name_or_alias) {
            Some(opt) if opt.ty == TermType::Int => {
                self.options.get(&opt.name).and_then(TermValue::as_int).unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn opt_float(&self, name_or_alias: &str) -> f64 {
        match self.cmd.option_by_key(name_or_alias) {
            Some(opt) if opt.ty == TermType::Float => {
                self.options.get(&opt.name).and_then(TermValue::as_float).unwrap_or(0.0)
            }
            _ => 0.0,
        }
    }

    pub fn flag(&self, name_or_alias: &str) -> bool {
        match self.cmd.flag_by_key(name_or_alias) {
            Some(flag) => self.flags.contains(&flag.name),
            None => false,
        }
    }

    pub fn arg_str(&self, name: &str) -> &str {
        match self.cmd.arg_named(name) {
            Some(arg) if arg.ty == TermType::Str => {
                self.args.get(&arg.name).and_then(TermValue::as_str).unwrap_or("")
            }
            _ => "",
        }
    }

    pub fn arg_int(&self, name: &str) -> i64 {
        match self.cmd.arg_named(name) {
            Some(arg) if arg.ty == TermType::Int => {
                self.args.get(&arg.name).and_then(TermValue::as_int).unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn arg_float(&self, name: &str) -> f64 {
        match self.cmd.arg_named(name) {
            Some(arg) if arg.ty == TermType::Float => {
                self.args.get(&arg.name).and_then(TermValue::as_float).unwrap_or(0.0)
            }
            _ => 0.0,
        }
    }
}
