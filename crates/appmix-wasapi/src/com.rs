//! COM apartment lifetime.

use std::marker::PhantomData;

use appmix_core::AppmixError;
use windows::Win32::System::Com::{COINIT_MULTITHREADED, CoInitializeEx, CoUninitialize};

use crate::os_err;

/// Joins the multithreaded apartment for the current thread and leaves it on
/// drop. Must outlive every COM interface created on this thread.
pub struct ComApartment {
    // CoUninitialize has to run on the thread that called CoInitializeEx.
    _not_send: PhantomData<*const ()>,
}

impl ComApartment {
    pub fn init() -> Result<Self, AppmixError> {
        unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) }
            .ok()
            .map_err(os_err("CoInitializeEx"))?;
        tracing::debug!("COM initialized (multithreaded)");
        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        tracing::debug!("COM uninitialized");
    }
}
