//! Templates used when the project has no `scripts/templates.json`.

pub(super) const DRIVER_HEADER: &str = r#"/*
 * {{driver_name}}.h
 *
 * Created: {{date}}
 *
 * Description:
 * Briefly describe the driver's functionality, key configurations,
 * and expected outcomes for user clarity.
 *
 */

#ifndef __{{driver_name_upper}}_H__
#define __{{driver_name_upper}}_H__

#include "atmega328p.h"

/******************************************************************************************
 *                                  Driver's Specific Details                             *
 ******************************************************************************************/

/******************************************************************************************
 *                                  APIs supported by this driver                         *
 ******************************************************************************************/
void {{driver_name}}_init(void);

#endif /* __{{driver_name_upper}}_H__ */
"#;

pub(super) const DRIVER_SOURCE: &str = r#"/*
 * {{driver_name}}.c
 *
 * Created: {{date}}
 *
 */

#include "{{driver_name}}.h"

void {{driver_name}}_init(void)
{
}
"#;

pub(super) const EXAMPLE_MAIN: &str = r#"/*
 * {{driver_name}}.c
 *
 * Created: {{date}}
 *
 * Description:
 * Describe what this example demonstrates.
 *
 */

#include <stdint.h>

int main(void)
{
    while (1)
    {
    }

    return 0;
}
"#;

pub(super) const BSP_HEADER: &str = r#"/*
 * {{driver_name}}.h
 *
 * Created: {{date}}
 *
 */

#ifndef __{{driver_name_upper}}_H__
#define __{{driver_name_upper}}_H__

#include "atmega328p_gpio.h"

/******************************************************************************************
 *                                  BSP Specific Details                                  *
 ******************************************************************************************/
void {{driver_name}}_init(void);

#endif /* __{{driver_name_upper}}_H__ */
"#;

pub(super) const BSP_SOURCE: &str = r#"/*
 * {{driver_name}}.c
 *
 * Created: {{date}}
 *
 */

#include "{{driver_name}}.h"

void {{driver_name}}_init(void)
{
}
"#;
