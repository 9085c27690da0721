use std::ptr;
use std::ffi::CString;

use libc::c_char;
use libretro_sys::Variable;

// Heap-allocates a NUL-terminated copy of `value`. Returns null when the
// string can't be represented (interior NUL byte).
fn copy_c_string( value: &str ) -> *const c_char {
    match CString::new( value ) {
        Ok( string ) => string.into_raw() as *const c_char,
        Err( _ ) => ptr::null()
    }
}

/// Sets the value field of a `retro_variable` record to null, for
/// RETRO_ENVIRONMENT_GET_VARIABLE queries the frontend has no answer to.
///
/// Any value previously stored through [`set_variable_value`] is not
/// reclaimed here; pass it to [`release_owned_string`] first if it has to
/// be freed.
pub fn clear_variable_value( target: *mut Variable ) {
    assert_ne!( target, ptr::null_mut() );

    unsafe {
        (*target).value = ptr::null();
    }
}

/// Stores a freshly allocated copy of `new_value` into the value field of
/// a `retro_variable` record, answering RETRO_ENVIRONMENT_GET_VARIABLE.
///
/// Returns whether the copy was made; on failure the value field is set
/// to null. The allocation is owned by whoever reads the record and must
/// eventually go back through [`release_owned_string`].
pub fn set_variable_value( target: *mut Variable, new_value: &str ) -> bool {
    assert_ne!( target, ptr::null_mut() );

    let copy = copy_c_string( new_value );
    unsafe {
        (*target).value = copy;
    }

    copy != ptr::null()
}

/// Stores a freshly allocated copy of `new_path` into a directory slot,
/// answering RETRO_ENVIRONMENT_GET_SYSTEM_DIRECTORY and
/// RETRO_ENVIRONMENT_GET_SAVE_DIRECTORY. On failure the slot is set to
/// null. Same ownership rule as [`set_variable_value`].
pub fn set_directory( target: *mut *const c_char, new_path: &str ) {
    assert_ne!( target, ptr::null_mut() );

    unsafe {
        *target = copy_c_string( new_path );
    }
}

/// Reclaims a string previously allocated by [`set_variable_value`] or
/// [`set_directory`]. Null is accepted and ignored. Passing any other
/// pointer is undefined behavior.
pub fn release_owned_string( string: *const c_char ) {
    if string == ptr::null() {
        return;
    }

    unsafe {
        drop( CString::from_raw( string as *mut c_char ) );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn empty_variable() -> Variable {
        Variable {
            key: ptr::null(),
            value: ptr::null()
        }
    }

    unsafe fn read_slot( slot: *const c_char ) -> String {
        CStr::from_ptr( slot ).to_str().unwrap().to_owned()
    }

    #[test]
    fn variable_value_round_trips_through_its_own_allocation() {
        let input = "4:3";
        let mut variable = empty_variable();

        assert!( set_variable_value( &mut variable, input ) );
        assert_ne!( variable.value, ptr::null() );
        assert_ne!( variable.value, input.as_ptr() as *const c_char );
        assert_eq!( unsafe { read_slot( variable.value ) }, input );

        release_owned_string( variable.value );
    }

    #[test]
    fn clearing_a_variable_nulls_its_value() {
        let mut variable = empty_variable();
        assert!( set_variable_value( &mut variable, "enabled" ) );

        let previous = variable.value;
        clear_variable_value( &mut variable );

        assert_eq!( variable.value, ptr::null() );
        release_owned_string( previous );
    }

    #[test]
    fn interior_nul_is_reported_and_nulls_the_field() {
        let mut variable = empty_variable();
        assert!( set_variable_value( &mut variable, "before" ) );
        release_owned_string( variable.value );

        assert_eq!( set_variable_value( &mut variable, "bad\0value" ), false );
        assert_eq!( variable.value, ptr::null() );
    }

    #[test]
    fn directory_round_trips_through_its_own_allocation() {
        let path = "/home/user/.config/retro/system";
        let mut slot: *const c_char = ptr::null();

        set_directory( &mut slot, path );

        assert_ne!( slot, ptr::null() );
        assert_ne!( slot, path.as_ptr() as *const c_char );
        assert_eq!( unsafe { read_slot( slot ) }, path );

        release_owned_string( slot );
    }

    #[test]
    fn directory_with_interior_nul_is_silently_nulled() {
        let mut slot: *const c_char = "stale".as_ptr() as *const c_char;

        set_directory( &mut slot, "bad\0path" );

        assert_eq!( slot, ptr::null() );
    }

    #[test]
    fn releasing_null_is_a_noop() {
        release_owned_string( ptr::null() );
    }
}
