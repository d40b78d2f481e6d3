//! Type members: fields, properties, methods, constructors, operators,
//! events.

use super::types::symbol_type_syntax;
use super::variables::DeclaratorSite;
use super::*;
use crate::method_body::MethodBodyVisitor;
use crate::semantic::EnclosingBody;
use crate::tokens::{convert_identifier, convert_modifiers, convert_overloadable_operator};
use vbconv_semantic::TypeSymbol;
use vbconv_syntax::NodeId;

const DEFAULT_INDEXER_NAME: &str = "Item";
const WITH_EVENTS_TODO: &str = "/* TODO ERROR didn't convert: WithEvents */";

fn without(modifiers: &[vb::Modifier], dropped: vb::Modifier) -> Vec<vb::Modifier> {
    modifiers.iter().copied().filter(|m| *m != dropped).collect()
}

fn object_type() -> cs::TypeSyntax {
    cs::TypeSyntax::Predefined(cs::PredefinedType::Object)
}

/// `MyBase.New(...)`, `Me.New(...)`, or `MyClass.New(...)` as a statement.
fn constructor_chain(statement: &vb::Statement) -> Option<(cs::ConstructorInitializerKind, NodeId, &[vb::Argument])> {
    let (vb::StatementKind::Expression { expression } | vb::StatementKind::Call { expression }) =
        &statement.kind
    else {
        return None;
    };
    let vb::Expr::Invocation {
        id,
        expression: target,
        arguments,
    } = expression
    else {
        return None;
    };
    let vb::Expr::MemberAccess {
        expression: Some(receiver),
        name,
        ..
    } = target.as_ref()
    else {
        return None;
    };
    if !name.unescaped().eq_ignore_ascii_case("New") {
        return None;
    }
    let kind = match receiver.as_ref() {
        vb::Expr::MyBase { .. } => cs::ConstructorInitializerKind::Base,
        vb::Expr::Me { .. } | vb::Expr::MyClass { .. } => cs::ConstructorInitializerKind::This,
        _ => return None,
    };
    Some((kind, *id, arguments.as_slice()))
}

impl NodesVisitor<'_> {
    // =========================================================================
    // Fields
    // =========================================================================

    pub(crate) fn convert_field(&mut self, field: &vb::FieldDeclaration) -> ConversionResult<MemberConversion> {
        let with_events = field.modifiers.contains(&vb::Modifier::WithEvents);
        let is_const = field.modifiers.contains(&vb::Modifier::Const);
        let mut modifiers = convert_modifiers(&field.modifiers, TokenContext::VariableOrConst)?;
        if self.in_module()
            && !modifiers.contains(&cs::Modifier::Const)
            && !modifiers.contains(&cs::Modifier::Static)
        {
            modifiers.push(cs::Modifier::Static);
        }
        let attributes = self.convert_attribute_lists(&field.attributes)?;
        let site = if is_const {
            DeclaratorSite::Constant
        } else {
            DeclaratorSite::Field
        };

        let mut members = Vec::new();
        for declarator in &field.declarators {
            for declaration in self.split_variable_declarations(declarator, site)? {
                members.push(cs::Member::Field(cs::FieldDeclaration {
                    attributes: attributes.clone(),
                    modifiers: modifiers.clone(),
                    declaration,
                }));
            }
        }

        if with_events {
            tracing::debug!("WithEvents dropped from field declaration");
            if self.options.emit_todo_comments
                && let Some(last) = members.pop()
            {
                members.push(last.with_trivia(Trivia::trailing(WITH_EVENTS_TODO)));
            }
        }

        let mut members = members.into_iter();
        let Some(primary) = members.next() else {
            return Err(ConversionError::unsupported(
                "FieldDeclaration",
                "a field declaration must declare at least one name",
            ));
        };
        let mut conversion = MemberConversion::single(primary);
        conversion.extras.extend(members);
        Ok(conversion)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub(crate) fn convert_property(
        &mut self,
        id: NodeId,
        property: &vb::PropertyDeclaration,
    ) -> ConversionResult<MemberConversion> {
        let is_read_only = property.modifiers.contains(&vb::Modifier::ReadOnly);
        let is_iterator = property.modifiers.contains(&vb::Modifier::Iterator);
        let is_indexer = property.modifiers.contains(&vb::Modifier::Default)
            && property
                .identifier
                .eq_ignore_ascii_case(DEFAULT_INDEXER_NAME);
        if !is_indexer && !property.parameters.is_empty() {
            return Err(ConversionError::unsupported(
                "PropertyBlock",
                "only the default Item property may take parameters",
            ));
        }

        let attributes = self.convert_attribute_lists(&property.attributes)?;
        let modifiers = convert_modifiers(
            &without(&property.modifiers, vb::Modifier::ReadOnly),
            self.member_context(),
        )?;

        let mut initializer = match &property.initializer {
            Some(initializer) => Some(self.convert_expr(initializer)?),
            None => None,
        };
        let (ty, property_type) = match &property.as_clause {
            Some(vb::AsClause::Simple { ty, .. }) => (self.convert_type(ty)?, self.semantic.type_of_syntax(ty)),
            Some(vb::AsClause::New { creation }) => {
                let vb::Expr::ObjectCreation { ty, .. } = creation else {
                    return Err(ConversionError::unsupported(
                        "AsNewClause",
                        "only object creation can follow As New",
                    ));
                };
                initializer = Some(self.convert_expr(creation)?);
                (self.convert_type(ty)?, self.semantic.type_of_syntax(ty))
            }
            None => {
                let declared = self.semantic.declared_symbol(id).and_then(|symbol| symbol.ty);
                match declared {
                    Some(declared) => (symbol_type_syntax(&declared), Some(declared)),
                    None => (object_type(), Some(SemanticHelper::object_type())),
                }
            }
        };

        let accessors = match &property.accessors {
            None => {
                let mut accessors = vec![cs::Accessor::auto(cs::AccessorKind::Get)];
                if !is_read_only {
                    accessors.push(cs::Accessor::auto(cs::AccessorKind::Set));
                }
                accessors
            }
            Some(accessors) => {
                let mut converted = Vec::with_capacity(accessors.len());
                for accessor in accessors {
                    let is_getter = accessor.kind == vb::AccessorKind::Get;
                    let body = if is_getter {
                        EnclosingBody::Getter {
                            property_type: property_type.clone(),
                        }
                    } else {
                        EnclosingBody::Setter
                    };
                    converted.push(self.convert_accessor(
                        accessor,
                        body,
                        is_iterator && is_getter,
                        Some(&ty),
                    )?);
                }
                converted
            }
        };

        if is_indexer {
            return Ok(MemberConversion::single(cs::Member::Indexer(cs::IndexerDeclaration {
                attributes,
                modifiers,
                ty,
                parameters: self.convert_parameters(&property.parameters)?,
                accessors,
            })));
        }
        Ok(MemberConversion::single(cs::Member::Property(cs::PropertyDeclaration {
            attributes,
            modifiers,
            ty,
            identifier: convert_identifier(&property.identifier),
            accessors,
            initializer,
        })))
    }

    /// `value_type` is the type of the implicit `value` of set and event
    /// accessors, used when the source names that parameter differently.
    fn convert_accessor(
        &mut self,
        accessor: &vb::Accessor,
        body: EnclosingBody,
        is_iterator: bool,
        value_type: Option<&cs::TypeSyntax>,
    ) -> ConversionResult<cs::Accessor> {
        let kind = match accessor.kind {
            vb::AccessorKind::Get => cs::AccessorKind::Get,
            vb::AccessorKind::Set => cs::AccessorKind::Set,
            vb::AccessorKind::AddHandler => cs::AccessorKind::Add,
            vb::AccessorKind::RemoveHandler => cs::AccessorKind::Remove,
            vb::AccessorKind::RaiseEvent => {
                return Err(ConversionError::unsupported(
                    "RaiseEventAccessorBlock",
                    "C# events have no raise accessor",
                ));
            }
        };
        let attributes = self.convert_attribute_lists(&accessor.attributes)?;
        let modifiers = convert_modifiers(&accessor.modifiers, TokenContext::Local)?;

        let mut statements = Vec::new();
        if kind != cs::AccessorKind::Get
            && let Some(parameter) = accessor.parameters.first()
            && !parameter.identifier.eq_ignore_ascii_case("value")
        {
            let ty = match (&parameter.as_type, value_type) {
                (Some(as_type), _) => self.convert_type(as_type)?,
                (None, Some(value_type)) => value_type.clone(),
                (None, None) => cs::TypeSyntax::Var,
            };
            statements.push(cs::Statement::local(
                ty,
                convert_identifier(&parameter.identifier),
                Some(cs::Expr::id("value")),
            ));
        }
        statements.extend(
            MethodBodyVisitor::new(self, body, is_iterator).convert_statements(&accessor.statements)?,
        );
        let statements = attach_statement_trivia(statements, &accessor.trivia);

        Ok(cs::Accessor {
            kind,
            attributes,
            modifiers,
            body: Some(statements),
        })
    }

    // =========================================================================
    // Methods
    // =========================================================================

    /// Return type of a `Function`: its `As` clause, the declared symbol,
    /// or `Object` when neither says.
    fn function_return_type(&self, id: NodeId, as_clause: Option<&vb::SimpleAsClause>) -> Option<TypeSymbol> {
        match as_clause {
            Some(clause) => self.semantic.type_of_syntax(&clause.ty).or_else(|| {
                self.semantic
                    .declared_symbol(id)
                    .and_then(|symbol| symbol.return_type().cloned())
            }),
            None => Some(
                self.semantic
                    .declared_symbol(id)
                    .and_then(|symbol| symbol.return_type().cloned())
                    .unwrap_or_else(SemanticHelper::object_type),
            ),
        }
    }

    /// Return type syntax and return-target attributes of a method-like
    /// declaration.
    fn convert_return_clause(
        &mut self,
        kind: vb::MethodKind,
        as_clause: Option<&vb::SimpleAsClause>,
    ) -> ConversionResult<(cs::TypeSyntax, Vec<cs::AttributeList>)> {
        match (kind, as_clause) {
            (_, Some(clause)) => Ok((
                self.convert_type(&clause.ty)?,
                self.convert_return_attribute_lists(&clause.attributes)?,
            )),
            (vb::MethodKind::Sub, None) => Ok((cs::TypeSyntax::void(), Vec::new())),
            (vb::MethodKind::Function, None) => Ok((object_type(), Vec::new())),
        }
    }

    pub(crate) fn convert_method(
        &mut self,
        id: NodeId,
        method: &vb::MethodDeclaration,
    ) -> ConversionResult<MemberConversion> {
        let mut attributes = self.convert_attribute_lists(&method.attributes)?;

        if method.identifier.eq_ignore_ascii_case("Finalize")
            && method.modifiers.contains(&vb::Modifier::Overrides)
        {
            let Some(identifier) = self.container_identifier().map(convert_identifier) else {
                return Err(ConversionError::unsupported(
                    "MethodBlock",
                    "Finalize outside a type",
                ));
            };
            let body = MethodBodyVisitor::new(self, EnclosingBody::Procedure, false)
                .convert_statements(method.body.as_deref().unwrap_or_default())?;
            return Ok(MemberConversion::single(cs::Member::Destructor(
                cs::DestructorDeclaration {
                    attributes,
                    identifier,
                    body,
                },
            )));
        }

        let modifiers = convert_modifiers(&method.modifiers, self.member_context())?;
        let (return_type, return_attributes) =
            self.convert_return_clause(method.kind, method.as_clause.as_ref())?;
        attributes.extend(return_attributes);
        let (type_parameters, constraints) = self.convert_type_parameters(&method.type_parameters)?;
        let parameters = self.convert_parameters(&method.parameters)?;

        let enclosing = match method.kind {
            vb::MethodKind::Sub => EnclosingBody::Procedure,
            vb::MethodKind::Function => EnclosingBody::Function {
                return_type: self.function_return_type(id, method.as_clause.as_ref()),
            },
        };
        let is_iterator = method.modifiers.contains(&vb::Modifier::Iterator);
        let body = match &method.body {
            Some(statements) => Some(
                MethodBodyVisitor::new(self, enclosing, is_iterator).convert_statements(statements)?,
            ),
            None => None,
        };

        Ok(MemberConversion::single(cs::Member::Method(cs::MethodDeclaration {
            attributes,
            modifiers,
            return_type,
            identifier: convert_identifier(&method.identifier),
            type_parameters,
            parameters,
            constraints,
            body,
        })))
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub(crate) fn convert_constructor(
        &mut self,
        constructor: &vb::ConstructorDeclaration,
    ) -> ConversionResult<MemberConversion> {
        let Some(identifier) = self.container_identifier().map(convert_identifier) else {
            return Err(ConversionError::unsupported(
                "ConstructorBlock",
                "constructor outside a type",
            ));
        };
        let attributes = self.convert_attribute_lists(&constructor.attributes)?;

        // Static constructors take no access modifier; module constructors
        // are always static.
        let is_static = self.in_module() || constructor.modifiers.contains(&vb::Modifier::Shared);
        let modifiers = if is_static {
            std::iter::once(cs::Modifier::Static).collect()
        } else {
            convert_modifiers(&constructor.modifiers, self.member_context())?
        };
        let parameters = self.convert_parameters(&constructor.parameters)?;

        let (initializer, statements) = match constructor.body.split_first() {
            Some((first, rest)) => match constructor_chain(first) {
                Some((kind, invocation, arguments)) => {
                    let callee = self.semantic.resolve_symbol(invocation);
                    let arguments = self.convert_arguments(arguments, callee.as_ref())?;
                    (
                        Some(cs::ConstructorInitializer { kind, arguments }),
                        rest,
                    )
                }
                None => (None, constructor.body.as_slice()),
            },
            None => (None, constructor.body.as_slice()),
        };
        let body = MethodBodyVisitor::new(self, EnclosingBody::Procedure, false).convert_statements(statements)?;

        Ok(MemberConversion::single(cs::Member::Constructor(cs::ConstructorDeclaration {
            attributes,
            modifiers,
            identifier,
            parameters,
            initializer,
            body,
        })))
    }

    // =========================================================================
    // Operators
    // =========================================================================

    pub(crate) fn convert_operator(
        &mut self,
        id: NodeId,
        operator: &vb::OperatorDeclaration,
    ) -> ConversionResult<MemberConversion> {
        let mut attributes = self.convert_attribute_lists(&operator.attributes)?;
        let modifiers = convert_modifiers(&operator.modifiers, self.member_context())?;
        let parameters = self.convert_parameters(&operator.parameters)?;
        let (return_type, return_attributes) =
            self.convert_return_clause(vb::MethodKind::Function, operator.as_clause.as_ref())?;
        attributes.extend(return_attributes);
        let enclosing = EnclosingBody::Function {
            return_type: self.function_return_type(id, operator.as_clause.as_ref()),
        };
        let body = MethodBodyVisitor::new(self, enclosing, false).convert_statements(&operator.body)?;

        if operator.operator == vb::OverloadableOperator::CType {
            let is_conversion = operator
                .modifiers
                .iter()
                .any(|m| matches!(m, vb::Modifier::Widening | vb::Modifier::Narrowing));
            if !is_conversion {
                return Err(ConversionError::unsupported(
                    "OperatorBlock",
                    "CType operators must be Widening or Narrowing",
                ));
            }
            return Ok(MemberConversion::single(cs::Member::ConversionOperator(
                cs::ConversionOperatorDeclaration {
                    attributes,
                    modifiers,
                    ty: return_type,
                    parameters,
                    body,
                },
            )));
        }

        Ok(MemberConversion::single(cs::Member::Operator(cs::OperatorDeclaration {
            attributes,
            modifiers,
            return_type,
            operator: convert_overloadable_operator(operator.operator)?,
            parameters,
            body,
        })))
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Three shapes: `Event E As Handler` is an event field; a `Custom Event`
    /// has add/remove accessors; `Event E(args)` also declares its handler
    /// delegate `EEventHandler`, emitted right after the field.
    pub(crate) fn convert_event(&mut self, event: &vb::EventDeclaration) -> ConversionResult<MemberConversion> {
        let attributes = self.convert_attribute_lists(&event.attributes)?;
        let modifiers = convert_modifiers(&event.modifiers, self.member_context())?;
        let identifier = convert_identifier(&event.identifier);

        if let Some(accessors) = &event.accessors {
            let Some(as_type) = &event.as_type else {
                return Err(ConversionError::unsupported(
                    "EventBlock",
                    "custom events need a delegate type",
                ));
            };
            let ty = self.convert_type(as_type)?;
            let mut converted = Vec::with_capacity(accessors.len());
            for accessor in accessors {
                converted.push(self.convert_accessor(accessor, EnclosingBody::Procedure, false, Some(&ty))?);
            }
            return Ok(MemberConversion::single(cs::Member::Event(cs::EventDeclaration {
                attributes,
                modifiers,
                ty,
                identifier,
                accessors: converted,
            })));
        }

        if let Some(as_type) = &event.as_type {
            let ty = self.convert_type(as_type)?;
            return Ok(MemberConversion::single(cs::Member::EventField(cs::FieldDeclaration {
                attributes,
                modifiers,
                declaration: cs::VariableDeclaration::single(ty, identifier, None),
            })));
        }

        let handler = format!("{}EventHandler", vb::node::unescape_identifier(&event.identifier));
        // A delegate is a type: it shares the event's accessibility and nothing else.
        let delegate = cs::Member::Delegate(cs::DelegateDeclaration {
            attributes: Vec::new(),
            modifiers: modifiers.iter().copied().filter(|m| m.is_accessibility()).collect(),
            return_type: cs::TypeSyntax::void(),
            identifier: handler.clone(),
            type_parameters: Vec::new(),
            parameters: self.convert_parameters(&event.parameters)?,
            constraints: Vec::new(),
        });
        let field = cs::Member::EventField(cs::FieldDeclaration {
            attributes,
            modifiers,
            declaration: cs::VariableDeclaration::single(
                cs::TypeSyntax::Named(cs::Name::id(handler)),
                identifier,
                None,
            ),
        });
        Ok(MemberConversion::single(field).with_extra(delegate))
    }
}
