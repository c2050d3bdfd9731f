//! Capability interfaces of the partition.
//!
//! One trait per contract, one method per operation. Operations take the
//! record by value, return nothing and never fail; implementers store
//! the record in a mailbox and nothing more. `&self` receivers keep the
//! trait object sharable through [`lru_sim::prelude::Handle`].

use crate::records::{Ans611Control, EgiCommand, EgiExtData, EgiVorExtData, RadaltExtData};

/// Receives external navigation data from the EGI LRU.
pub trait EgiExtDataIfc {
    /// Accepts one navigation data record.
    fn set_egi_ext_data(&self, data: EgiExtData);
}

/// Receives external altitude data from the radar altimeter LRU.
pub trait RadaltExtDataIfc {
    /// Accepts one altitude data record.
    fn set_radalt_ext_data(&self, data: RadaltExtData);
}

/// Receives ANS-611 mode and control words.
pub trait Ans611ControlIfc {
    /// Accepts one mode word.
    fn set_egi_mode(&self, data: Ans611Control);

    /// Accepts one control word.
    fn set_ans611_control_data(&self, data: Ans611Control);
}

/// Receives VOR/ILS navigation data from the EGI computer.
pub trait EgiVorExtDataIfc {
    /// Accepts one VOR/ILS data record.
    fn set_egi_vor_ext_data(&self, data: EgiVorExtData);
}

/// Receives commands addressed to the EGI computer.
pub trait EgiCommandIfc {
    /// Accepts one command word.
    fn set_egi_command(&self, cmd: EgiCommand);
}
