//! Compilation unit, imports, namespaces, and type-level declarations.

use super::*;
use crate::tokens::{convert_identifier, convert_modifiers};

impl NodesVisitor<'_> {
    pub fn convert_compilation_unit(&mut self, unit: &vb::CompilationUnit) -> ConversionResult<cs::CompilationUnit> {
        let model = self.semantic.model();
        let mut usings = Vec::new();
        for import in model.global_imports().iter().chain(&unit.imports) {
            usings.push(self.convert_import(import)?);
        }
        let attributes = self.convert_attribute_lists(&unit.attributes)?;
        let members = self.convert_members(&unit.members)?;
        Ok(cs::CompilationUnit {
            usings,
            attributes,
            members,
        })
    }

    fn convert_import(&mut self, import: &vb::ImportsClause) -> ConversionResult<cs::UsingDirective> {
        match import {
            vb::ImportsClause::Simple { alias, name } => Ok(cs::UsingDirective {
                alias: alias.as_deref().map(convert_identifier),
                name: self.convert_name(name)?,
            }),
            vb::ImportsClause::XmlNamespace { .. } => {
                Err(ConversionError::unimplemented("XmlNamespaceImportsClause"))
            }
        }
    }

    /// Convert a member list, expanding each declaration into the members it
    /// produces and carrying its comments across.
    pub(crate) fn convert_members(&mut self, declarations: &[vb::Declaration]) -> ConversionResult<Vec<cs::Member>> {
        let mut members = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            let converted = self.convert_declaration(declaration)?;
            members.extend(attach_member_trivia(
                converted.into_members().collect(),
                &declaration.trivia,
            ));
        }
        Ok(members)
    }

    pub fn convert_declaration(&mut self, declaration: &vb::Declaration) -> ConversionResult<MemberConversion> {
        self.enter(declaration.kind.kind_name())?;
        let result = self.convert_declaration_kind(declaration);
        self.leave();
        result
    }

    fn convert_declaration_kind(&mut self, declaration: &vb::Declaration) -> ConversionResult<MemberConversion> {
        let id = declaration.id;
        match &declaration.kind {
            vb::DeclarationKind::Namespace { name, members } => {
                Ok(MemberConversion::single(cs::Member::Namespace {
                    name: self.convert_name(name)?,
                    members: self.convert_members(members)?,
                }))
            }
            vb::DeclarationKind::Type(block) => self.convert_type_block(block),
            vb::DeclarationKind::Enum(block) => self.convert_enum(block),
            vb::DeclarationKind::Delegate(delegate) => self.convert_delegate(delegate),
            vb::DeclarationKind::Field(field) => self.convert_field(field),
            vb::DeclarationKind::Property(property) => self.convert_property(id, property),
            vb::DeclarationKind::Method(method) => self.convert_method(id, method),
            vb::DeclarationKind::Constructor(constructor) => self.convert_constructor(constructor),
            vb::DeclarationKind::Operator(operator) => self.convert_operator(id, operator),
            vb::DeclarationKind::Event(event) => self.convert_event(event),
            vb::DeclarationKind::ExternalMethod { .. } => {
                Err(ConversionError::unimplemented(declaration.kind.kind_name()))
            }
        }
    }

    fn convert_type_block(&mut self, block: &vb::TypeBlock) -> ConversionResult<MemberConversion> {
        let (context, keyword) = match block.kind {
            vb::TypeBlockKind::Class => (TokenContext::Global, cs::TypeKeyword::Class),
            vb::TypeBlockKind::Module => (TokenContext::InterfaceOrModule, cs::TypeKeyword::Class),
            vb::TypeBlockKind::Structure => (TokenContext::Global, cs::TypeKeyword::Struct),
            vb::TypeBlockKind::Interface => (TokenContext::InterfaceOrModule, cs::TypeKeyword::Interface),
        };
        let attributes = self.convert_attribute_lists(&block.attributes)?;
        let mut modifiers = convert_modifiers(&block.modifiers, context)?;
        if block.kind == vb::TypeBlockKind::Module && !modifiers.contains(&cs::Modifier::Static) {
            modifiers.push(cs::Modifier::Static);
        }
        let (type_parameters, constraints) = self.convert_type_parameters(&block.type_parameters)?;
        let mut base_list = self.convert_types(&block.inherits)?;
        base_list.extend(self.convert_types(&block.implements)?);

        self.push_container(&block.identifier, block.kind);
        let members = self.convert_members(&block.members);
        self.pop_container();

        Ok(MemberConversion::single(cs::Member::Type(cs::TypeDeclaration {
            keyword,
            attributes,
            modifiers,
            identifier: convert_identifier(&block.identifier),
            type_parameters,
            base_list,
            constraints,
            members: members?,
        })))
    }

    fn convert_enum(&mut self, block: &vb::EnumBlock) -> ConversionResult<MemberConversion> {
        let mut attributes = self.convert_attribute_lists(&block.attributes)?;
        let modifiers = convert_modifiers(&block.modifiers, TokenContext::Global)?;
        let base_type = match &block.underlying_type {
            Some(clause) => {
                attributes.extend(self.convert_return_attribute_lists(&clause.attributes)?);
                Some(self.convert_type(&clause.ty)?)
            }
            None => None,
        };

        let mut members = Vec::with_capacity(block.members.len());
        for member in &block.members {
            members.push(cs::EnumMemberDeclaration {
                attributes: self.convert_attribute_lists(&member.attributes)?,
                identifier: convert_identifier(&member.identifier),
                value: match &member.initializer {
                    Some(initializer) => Some(self.convert_expr(initializer)?),
                    None => None,
                },
                trivia: member.trivia.convert(),
            });
        }

        Ok(MemberConversion::single(cs::Member::Enum(cs::EnumDeclaration {
            attributes,
            modifiers,
            identifier: convert_identifier(&block.identifier),
            base_type,
            members,
        })))
    }

    fn convert_delegate(&mut self, delegate: &vb::DelegateDeclaration) -> ConversionResult<MemberConversion> {
        let mut attributes = self.convert_attribute_lists(&delegate.attributes)?;
        let modifiers = convert_modifiers(&delegate.modifiers, TokenContext::Global)?;
        let return_type = match (&delegate.as_clause, delegate.kind) {
            (Some(clause), _) => {
                attributes.extend(self.convert_return_attribute_lists(&clause.attributes)?);
                self.convert_type(&clause.ty)?
            }
            (None, vb::MethodKind::Sub) => cs::TypeSyntax::void(),
            (None, vb::MethodKind::Function) => cs::TypeSyntax::Predefined(cs::PredefinedType::Object),
        };
        let (type_parameters, constraints) = self.convert_type_parameters(&delegate.type_parameters)?;

        Ok(MemberConversion::single(cs::Member::Delegate(cs::DelegateDeclaration {
            attributes,
            modifiers,
            return_type,
            identifier: convert_identifier(&delegate.identifier),
            type_parameters,
            parameters: self.convert_parameters(&delegate.parameters)?,
            constraints,
        })))
    }
}
