//! Expression, type, and name emission for `CSharpPrinter`.
//!
//! Parentheses are inserted from operator precedence: the tree never needs
//! to carry `Parenthesized` nodes just to keep printed text correct.

use super::*;

// Precedence levels, lowest binds loosest.
const PREC_ASSIGNMENT: u8 = 1;
const PREC_CONDITIONAL: u8 = 2;
const PREC_COALESCE: u8 = 3;
const PREC_RELATIONAL: u8 = 10;
const PREC_UNARY: u8 = 14;
const PREC_PRIMARY: u8 = 15;

fn binary_precedence(operator: BinaryOperator) -> u8 {
    match operator {
        BinaryOperator::Coalesce => PREC_COALESCE,
        BinaryOperator::LogicalOr => 4,
        BinaryOperator::LogicalAnd => 5,
        BinaryOperator::BitwiseOr => 6,
        BinaryOperator::ExclusiveOr => 7,
        BinaryOperator::BitwiseAnd => 8,
        BinaryOperator::Equals | BinaryOperator::NotEquals => 9,
        BinaryOperator::LessThan
        | BinaryOperator::LessThanOrEqual
        | BinaryOperator::GreaterThan
        | BinaryOperator::GreaterThanOrEqual => PREC_RELATIONAL,
        BinaryOperator::LeftShift | BinaryOperator::RightShift => 11,
        BinaryOperator::Add | BinaryOperator::Subtract => 12,
        BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 13,
    }
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Assignment { .. } | Expr::Lambda { .. } => PREC_ASSIGNMENT,
        Expr::Conditional { .. } => PREC_CONDITIONAL,
        Expr::Binary { operator, .. } => binary_precedence(*operator),
        Expr::As { .. } | Expr::Is { .. } => PREC_RELATIONAL,
        Expr::PrefixUnary { .. } | Expr::Cast { .. } | Expr::Await(_) => PREC_UNARY,
        Expr::Commented { expression, .. } => precedence(expression),
        _ => PREC_PRIMARY,
    }
}

/// Escape a string value for a regular `"..."` literal.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        push_escaped(&mut out, ch, '"');
    }
    out
}

/// Escape a character value for a `'.'` literal.
pub fn escape_char(value: char) -> String {
    let mut out = String::with_capacity(2);
    push_escaped(&mut out, value, '\'');
    out
}

fn push_escaped(out: &mut String, ch: char, quote: char) {
    match ch {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
        c => out.push(c),
    }
}

impl CSharpPrinter {
    pub(crate) fn emit_comma_separated(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expr(expr);
        }
    }

    pub(crate) fn emit_arguments(&mut self, arguments: &[Argument]) {
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(name) = &argument.name_colon {
                self.write(name);
                self.write(": ");
            }
            match argument.ref_kind {
                Some(ArgumentRefKind::Ref) => self.write("ref "),
                Some(ArgumentRefKind::Out) => self.write("out "),
                None => {}
            }
            self.emit_expr(&argument.expression);
        }
    }

    /// Emit `expr`, parenthesized when it binds looser than `min`.
    fn emit_operand(&mut self, expr: &Expr, min: u8) {
        if precedence(expr) < min {
            self.write("(");
            self.emit_expr(expr);
            self.write(")");
        } else {
            self.emit_expr(expr);
        }
    }

    fn emit_type_arguments(&mut self, type_arguments: &[TypeSyntax]) {
        if type_arguments.is_empty() {
            return;
        }
        self.write("<");
        for (i, ty) in type_arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_type(ty);
        }
        self.write(">");
    }

    fn emit_initializer(&mut self, initializer: &Initializer) {
        if initializer.expressions.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{ ");
        self.emit_comma_separated(&initializer.expressions);
        self.write(" }");
    }

    pub fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(literal) => self.emit_literal(literal),
            Expr::InterpolatedString(contents) => {
                self.write("$\"");
                for content in contents {
                    match content {
                        InterpolatedContent::Text(text) => {
                            // Braces arrive already doubled.
                            let escaped = escape_string(text);
                            self.write(&escaped);
                        }
                        InterpolatedContent::Interpolation {
                            expression,
                            alignment,
                            format,
                        } => {
                            self.write("{");
                            // `:` would start the format clause.
                            if matches!(expression.as_ref(), Expr::Conditional { .. }) {
                                self.write("(");
                                self.emit_expr(expression);
                                self.write(")");
                            } else {
                                self.emit_expr(expression);
                            }
                            if let Some(alignment) = alignment {
                                self.write(",");
                                self.emit_expr(alignment);
                            }
                            if let Some(format) = format {
                                self.write(":");
                                self.write(format);
                            }
                            self.write("}");
                        }
                    }
                }
                self.write("\"");
            }
            Expr::Identifier(name) => self.write(name),
            Expr::Generic {
                identifier,
                type_arguments,
            } => {
                self.write(identifier);
                self.emit_type_arguments(type_arguments);
            }
            Expr::PredefinedType(ty) => self.write(ty.keyword()),
            Expr::AliasQualified { alias, name } => {
                self.write(alias);
                self.write("::");
                self.write(name);
            }
            Expr::This => self.write("this"),
            Expr::Base => self.write("base"),
            Expr::MemberAccess {
                expression,
                name,
                type_arguments,
            } => {
                self.emit_operand(expression, PREC_PRIMARY);
                self.write(".");
                self.write(name);
                self.emit_type_arguments(type_arguments);
            }
            Expr::MemberBinding { name } => {
                self.write(".");
                self.write(name);
            }
            Expr::ConditionalAccess {
                expression,
                when_not_null,
            } => {
                self.emit_operand(expression, PREC_PRIMARY);
                self.write("?");
                self.emit_expr(when_not_null);
            }
            Expr::Invocation {
                expression,
                arguments,
            } => {
                self.emit_operand(expression, PREC_PRIMARY);
                self.write("(");
                self.emit_arguments(arguments);
                self.write(")");
            }
            Expr::ElementAccess {
                expression,
                arguments,
            } => {
                self.emit_operand(expression, PREC_PRIMARY);
                self.write("[");
                self.emit_arguments(arguments);
                self.write("]");
            }
            Expr::ObjectCreation {
                ty,
                arguments,
                initializer,
            } => {
                self.write("new ");
                self.emit_type(ty);
                match (arguments, initializer) {
                    (Some(arguments), _) => {
                        self.write("(");
                        self.emit_arguments(arguments);
                        self.write(")");
                    }
                    (None, None) => self.write("()"),
                    (None, Some(_)) => {}
                }
                if let Some(initializer) = initializer {
                    self.write(" ");
                    self.emit_initializer(initializer);
                }
            }
            Expr::ArrayCreation { ty, initializer } => {
                self.write("new ");
                self.emit_type(ty);
                if let Some(initializer) = initializer {
                    self.write(" ");
                    self.emit_initializer(initializer);
                }
            }
            Expr::ImplicitArrayCreation(initializer) => {
                self.write("new[] ");
                self.emit_initializer(initializer);
            }
            Expr::Initializer(initializer) => self.emit_initializer(initializer),
            Expr::AnonymousObjectCreation(fields) => {
                if fields.is_empty() {
                    self.write("new { }");
                    return;
                }
                self.write("new { ");
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write(name);
                    self.write(" = ");
                    self.emit_expr(value);
                }
                self.write(" }");
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let prec = binary_precedence(*operator);
                // `??` is right-associative, everything else left.
                let (left_min, right_min) = if *operator == BinaryOperator::Coalesce {
                    (prec + 1, prec)
                } else {
                    (prec, prec + 1)
                };
                self.emit_operand(left, left_min);
                self.write(" ");
                self.write(operator.token());
                self.write(" ");
                self.emit_operand(right, right_min);
            }
            Expr::Assignment {
                left,
                operator,
                right,
            } => {
                self.emit_operand(left, PREC_UNARY);
                self.write(" ");
                self.write(operator.token());
                self.write(" ");
                self.emit_operand(right, PREC_ASSIGNMENT);
            }
            Expr::PrefixUnary { operator, operand } => {
                self.write(operator.token());
                // Keep `- -x` from printing as `--x`.
                let clashes = matches!(
                    (operator, operand.as_ref()),
                    (
                        PrefixOperator::Minus | PrefixOperator::Decrement,
                        Expr::PrefixUnary {
                            operator: PrefixOperator::Minus | PrefixOperator::Decrement,
                            ..
                        }
                    ) | (
                        PrefixOperator::Plus | PrefixOperator::Increment,
                        Expr::PrefixUnary {
                            operator: PrefixOperator::Plus | PrefixOperator::Increment,
                            ..
                        }
                    )
                );
                if clashes {
                    self.write("(");
                    self.emit_expr(operand);
                    self.write(")");
                } else {
                    self.emit_operand(operand, PREC_UNARY);
                }
            }
            Expr::PostfixUnary { operand, operator } => {
                self.emit_operand(operand, PREC_PRIMARY);
                self.write(operator.token());
            }
            Expr::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                self.emit_operand(condition, PREC_COALESCE);
                self.write(" ? ");
                self.emit_operand(when_true, PREC_CONDITIONAL);
                self.write(" : ");
                self.emit_operand(when_false, PREC_CONDITIONAL);
            }
            Expr::Cast { ty, expression } => {
                self.write("(");
                self.emit_type(ty);
                self.write(")");
                // `(Color)-x` parses as a subtraction unless the type is a keyword.
                let signed = matches!(
                    expression.as_ref(),
                    Expr::PrefixUnary {
                        operator: PrefixOperator::Plus
                            | PrefixOperator::Minus
                            | PrefixOperator::Increment
                            | PrefixOperator::Decrement,
                        ..
                    }
                );
                if signed && !matches!(ty, TypeSyntax::Predefined(_)) {
                    self.write("(");
                    self.emit_expr(expression);
                    self.write(")");
                } else {
                    self.emit_operand(expression, PREC_UNARY);
                }
            }
            Expr::As { expression, ty } => {
                self.emit_operand(expression, PREC_RELATIONAL);
                self.write(" as ");
                self.emit_type(ty);
            }
            Expr::Is { expression, ty } => {
                self.emit_operand(expression, PREC_RELATIONAL);
                self.write(" is ");
                self.emit_type(ty);
            }
            Expr::TypeOf(ty) => {
                self.write("typeof(");
                self.emit_type(ty);
                self.write(")");
            }
            Expr::Default(ty) => {
                self.write("default(");
                self.emit_type(ty);
                self.write(")");
            }
            Expr::Parenthesized(inner) => {
                self.write("(");
                self.emit_expr(inner);
                self.write(")");
            }
            Expr::Lambda {
                is_async,
                parameters,
                body,
            } => {
                if *is_async {
                    self.write("async ");
                }
                match parameters {
                    LambdaParameters::Simple(name) => self.write(name),
                    LambdaParameters::List(parameters) => {
                        self.emit_parameter_list(parameters, "(", ")");
                    }
                }
                self.write(" =>");
                match body {
                    LambdaBody::Expression(expression) => {
                        self.write(" ");
                        self.emit_operand(expression, PREC_ASSIGNMENT);
                    }
                    LambdaBody::Block(statements) => self.emit_block_on_new_line(statements),
                }
            }
            Expr::Await(operand) => {
                self.write("await ");
                self.emit_operand(operand, PREC_UNARY);
            }
            Expr::Commented {
                expression,
                comment,
            } => {
                self.emit_expr(expression);
                self.write(" /* ");
                self.write(comment);
                self.write(" */");
            }
        }
    }

    fn emit_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Null => self.write("null"),
            Literal::Bool(true) => self.write("true"),
            Literal::Bool(false) => self.write("false"),
            Literal::Numeric(text) => self.write(text),
            Literal::String(value) => {
                self.write("\"");
                let escaped = escape_string(value);
                self.write(&escaped);
                self.write("\"");
            }
            Literal::Char(value) => {
                self.write("'");
                let escaped = escape_char(*value);
                self.write(&escaped);
                self.write("'");
            }
        }
    }

    pub fn emit_type(&mut self, ty: &TypeSyntax) {
        match ty {
            TypeSyntax::Predefined(predefined) => self.write(predefined.keyword()),
            TypeSyntax::Named(name) => self.emit_name(name),
            TypeSyntax::Array { element, ranks } => {
                self.emit_type(element);
                for rank in ranks {
                    self.write("[");
                    for (i, size) in rank.sizes.iter().enumerate() {
                        if i > 0 {
                            self.write(if size.is_some() { ", " } else { "," });
                        }
                        if let Some(size) = size {
                            self.emit_expr(size);
                        }
                    }
                    self.write("]");
                }
            }
            TypeSyntax::Nullable(element) => {
                self.emit_type(element);
                self.write("?");
            }
            TypeSyntax::Var => self.write("var"),
        }
    }

    pub fn emit_name(&mut self, name: &Name) {
        match name {
            Name::Identifier(identifier) => self.write(identifier),
            Name::Generic {
                identifier,
                type_arguments,
            } => {
                self.write(identifier);
                self.emit_type_arguments(type_arguments);
            }
            Name::Qualified { left, right } => {
                self.emit_name(left);
                self.write(".");
                self.emit_name(right);
            }
            Name::AliasQualified { alias, name } => {
                self.write(alias);
                self.write("::");
                self.emit_name(name);
            }
        }
    }
}
