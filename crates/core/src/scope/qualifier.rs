use super::QualifierFactory;
use towerscope_api::{ClassKind, ClassRef, Expression, ReceiverValue, TypeRef};

/// Builds `Obj`-style qualifier receivers.
///
/// The receiver's type is the object itself, or the enclosing enum class for
/// an enum entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardQualifierFactory;

impl QualifierFactory for StandardQualifierFactory {
    fn qualifier_receiver(&self, class: &ClassRef) -> Option<ReceiverValue> {
        let ty = match class.kind {
            ClassKind::Object => TypeRef::class(class.id.clone()),
            ClassKind::EnumEntry => TypeRef::class(class.id.outer().unwrap_or_else(|| class.id.clone())),
            _ => return None,
        };
        Some(ReceiverValue::explicit(
            Expression::Qualifier(class.id.clone()),
            ty,
        ))
    }
}
